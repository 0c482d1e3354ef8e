// Domain value objects representing core business concepts

use std::fmt;

/// Outcome of a solve request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Every element is covered by the returned sets
    Feasible,
    /// Some element is contained in no set, so no cover exists
    Infeasible,
    /// Instance data or solver configuration was rejected before solving
    Invalid,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Feasible => write!(f, "Feasible"),
            SolutionStatus::Infeasible => write!(f, "Infeasible"),
            SolutionStatus::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Tightness tolerance used when the caller does not provide one.
pub const DEFAULT_EPSILON: f64 = 1e-4;

// Domain service interface for set cover solvers
// Defines the contract that any solver implementation must follow

use super::models::{Cover, Instance};
use super::value_objects::SolutionStatus;

/// Reasons an instance is rejected before solving
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("instance has {sets} sets but {costs} costs")]
    CostCountMismatch { sets: usize, costs: usize },

    #[error("set {set} references element {element} outside 0..{element_count}")]
    ElementOutOfRange {
        set: usize,
        element: usize,
        element_count: usize,
    },

    #[error("set {set} references negative element {element}")]
    NegativeElement { set: usize, element: i64 },

    #[error("element count {element_count} does not fit in memory on this platform")]
    ElementCountTooLarge { element_count: u64 },

    #[error("set {set} has invalid cost {cost}, costs must be finite and non-negative")]
    InvalidCost { set: usize, cost: f64 },
}

/// Error types for the solver service
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid instance: {0}")]
    Validation(#[from] ValidationError),

    #[error("Infeasible instance: element {element} is not contained in any set")]
    InfeasibleInstance { element: usize },

    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
}

impl SolverError {
    pub fn status(&self) -> SolutionStatus {
        match self {
            SolverError::InfeasibleInstance { .. } => SolutionStatus::Infeasible,
            SolverError::Validation(_) | SolverError::InvalidConfig(_) => SolutionStatus::Invalid,
        }
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for set cover solvers
pub trait SetCoverSolver: Send + Sync {
    /// Compute a cover of every element of the instance
    fn solve(&self, instance: &Instance) -> Result<Cover>;

    /// Validate an instance without solving it
    fn validate(&self, instance: &Instance) -> Result<()> {
        instance.validate()?;
        Ok(())
    }

    /// Get the name of this solver
    fn name(&self) -> &str;

    /// Upper bound on cost / OPT this solver guarantees for the instance
    fn approximation_guarantee(&self, instance: &Instance) -> f64;
}

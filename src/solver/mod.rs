// Solver implementations and their working structures

pub mod coverage;
pub mod dual_growing_solver;
pub mod pruning;

pub use coverage::CoverageIndex;
pub use dual_growing_solver::{solve, DualGrowingSolver};
pub use pruning::RedundancyPruner;

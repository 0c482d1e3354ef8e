// Domain layer: instances, covers and the solver contract
pub mod domain;

// Solver layer: primal-dual set cover and its post-processing
pub mod solver;

// Application layer: gRPC service and protobuf mapping
#[cfg(feature = "server")]
pub mod application;

// Infrastructure layer: External concerns (gRPC, server)
#[cfg(feature = "server")]
pub mod infrastructure;

// Re-export commonly used types
pub use domain::{
    Cover, Instance, SetCoverSolver, SolutionStatus, SolverConfig, SolverError,
    SolverStatistics, ValidationError, DEFAULT_EPSILON,
};

pub use solver::{solve, CoverageIndex, DualGrowingSolver, RedundancyPruner};

#[cfg(feature = "server")]
pub use application::GrpcSetCoverService;

#[cfg(feature = "server")]
pub use infrastructure::{start_server, ServerConfig};

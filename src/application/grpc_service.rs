use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{info, warn};

use super::mappers::{self, set_cover};
use crate::domain::models::count_u32;
use crate::domain::solver_service::{SetCoverSolver, SolverError};
use crate::solver::DualGrowingSolver;

/// gRPC service implementation
pub struct GrpcSetCoverService {
    default_solver: Arc<dyn SetCoverSolver>,
}

impl GrpcSetCoverService {
    /// `default_solver` handles requests that carry no solver configuration.
    pub fn new(default_solver: Arc<dyn SetCoverSolver>) -> Self {
        Self { default_solver }
    }

    fn solve_request(
        &self,
        proto_instance: set_cover::SetCoverInstance,
    ) -> Result<set_cover::SetCoverResult, Status> {
        info!(
            name = %proto_instance.name,
            elements = proto_instance.element_count,
            sets = proto_instance.sets.len(),
            "solving instance"
        );

        let (instance, config) = mappers::proto_to_domain_request(&proto_instance)
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

        let solver: Arc<dyn SetCoverSolver> = if proto_instance.solver_config.is_some() {
            Arc::new(DualGrowingSolver::new(config))
        } else {
            Arc::clone(&self.default_solver)
        };

        match solver.solve(&instance) {
            Ok(cover) => {
                info!(
                    selected = cover.sets.len(),
                    total_cost = cover.total_cost,
                    "instance solved"
                );
                Ok(mappers::domain_to_proto_cover(cover, solver.name()))
            }
            Err(e @ SolverError::InfeasibleInstance { .. }) => {
                warn!(error = %e, "instance is infeasible");
                Ok(mappers::domain_to_proto_failure(&e, solver.name()))
            }
            Err(e) => Err(Status::invalid_argument(e.to_string())),
        }
    }
}

impl Default for GrpcSetCoverService {
    fn default() -> Self {
        Self::new(Arc::new(DualGrowingSolver::default()))
    }
}

#[tonic::async_trait]
impl set_cover::set_cover_solver_server::SetCoverSolver for GrpcSetCoverService {
    async fn solve(
        &self,
        request: Request<set_cover::SetCoverInstance>,
    ) -> Result<Response<set_cover::SetCoverResult>, Status> {
        let result = self.solve_request(request.into_inner())?;
        Ok(Response::new(result))
    }

    async fn solve_stream(
        &self,
        request: Request<tonic::Streaming<set_cover::InstanceChunk>>,
    ) -> Result<Response<set_cover::SetCoverResult>, Status> {
        let mut stream = request.into_inner();

        let mut header: Option<set_cover::InstanceHeader> = None;
        let mut sets = Vec::new();

        // Collect all chunks
        while let Some(chunk) = stream.message().await? {
            match chunk.chunk {
                Some(set_cover::instance_chunk::Chunk::Header(h)) => {
                    if header.is_some() {
                        return Err(Status::invalid_argument(
                            "Instance header was sent more than once",
                        ));
                    }
                    header = Some(h);
                }
                Some(set_cover::instance_chunk::Chunk::Set(s)) => {
                    sets.push(s);
                }
                None => {}
            }
        }

        let header =
            header.ok_or_else(|| Status::invalid_argument("Instance header is required"))?;

        // Reuse the unary logic
        let proto_instance = set_cover::SetCoverInstance {
            name: header.name,
            element_count: header.element_count,
            sets,
            solver_config: header.solver_config,
        };
        let result = self.solve_request(proto_instance)?;
        Ok(Response::new(result))
    }

    async fn validate(
        &self,
        request: Request<set_cover::SetCoverInstance>,
    ) -> Result<Response<set_cover::ValidationResult>, Status> {
        let proto_instance = request.into_inner();

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut max_frequency = 0;

        match mappers::proto_to_domain_request(&proto_instance) {
            Ok((instance, config)) => {
                if let Err(e) = config.validate() {
                    errors.push(e.to_string());
                }
                match self.default_solver.validate(&instance) {
                    Ok(()) => {
                        max_frequency = instance.max_frequency();

                        let uncovered =
                            instance.element_count() - instance.covered_elements().len();
                        if uncovered > 0 {
                            warnings.push(format!(
                                "{} elements are not contained in any set, the instance is infeasible",
                                uncovered
                            ));
                        }
                        let empty_sets = instance.sets().iter().filter(|s| s.is_empty()).count();
                        if empty_sets > 0 {
                            warnings.push(format!("{} sets cover no element", empty_sets));
                        }
                    }
                    Err(e) => errors.push(e.to_string()),
                }
            }
            Err(e) => errors.push(e.to_string()),
        }

        Ok(Response::new(set_cover::ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            element_count: proto_instance.element_count,
            num_sets: count_u32(proto_instance.sets.len()),
            max_frequency: count_u32(max_frequency),
        }))
    }
}

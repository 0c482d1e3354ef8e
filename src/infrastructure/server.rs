// Infrastructure: Server setup and configuration

use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::info;

use crate::application::mappers::set_cover::set_cover_solver_server::SetCoverSolverServer;
use crate::application::GrpcSetCoverService;
use crate::domain::solver_service::SetCoverSolver;

pub struct ServerConfig {
    pub address: SocketAddr,
    pub solver: Arc<dyn SetCoverSolver>,
}

impl ServerConfig {
    pub fn new(address: SocketAddr, solver: Arc<dyn SetCoverSolver>) -> Self {
        Self { address, solver }
    }
}

pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        address = %config.address,
        solver = config.solver.name(),
        "set cover server listening"
    );

    let service = GrpcSetCoverService::new(config.solver);

    Server::builder()
        .add_service(SetCoverSolverServer::new(service))
        .serve(config.address)
        .await?;

    Ok(())
}

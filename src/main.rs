use clap::Parser;
use setcover::{start_server, DualGrowingSolver, ServerConfig, SolverConfig};
use std::sync::Arc;
use std::time::Instant;

/// gRPC server for primal-dual weighted set cover.
#[derive(Parser, Debug)]
#[clap(about = "Primal-dual set cover server")]
struct App {
    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[clap(short, long, default_value = "info")]
    log_level: tracing::Level,

    /// Address to listen on
    #[clap(short, long, default_value = "0.0.0.0:50051")]
    address: String,

    /// Tightness tolerance for requests that carry no solver configuration
    #[clap(long, default_value_t = setcover::DEFAULT_EPSILON)]
    epsilon: f64,

    /// Prune redundant sets for requests that carry no solver configuration
    #[clap(long)]
    prune: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = App::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::from(Instant::now()))
        .with_thread_ids(true)
        .with_max_level(args.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let address = args.address.parse()?;

    let config = SolverConfig::default()
        .with_epsilon(args.epsilon)
        .with_pruning(args.prune);
    config.validate()?;
    let solver = Arc::new(DualGrowingSolver::new(config));

    start_server(ServerConfig::new(address, solver)).await?;

    Ok(())
}

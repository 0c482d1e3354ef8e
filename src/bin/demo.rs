// Reference instance: 5 elements, 4 sets.
//   S_0 = {0, 1}     cost 50
//   S_1 = {1, 2, 3}  cost 2
//   S_2 = {3, 4}     cost 3
//   S_3 = {4, 0}     cost 2
// Every element lies in two sets, so the cover costs at most twice the optimum.

use clap::Parser;
use setcover::{DualGrowingSolver, Instance, SetCoverSolver, SolverConfig};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(about = "Solve the reference set cover instance with the primal-dual schema")]
struct App {
    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[clap(short, long, default_value = "warn")]
    log_level: tracing::Level,

    /// Tolerance under which a dual constraint counts as tight
    #[clap(long, default_value_t = setcover::DEFAULT_EPSILON)]
    epsilon: f64,

    /// Drop selected sets the rest of the cover already covers
    #[clap(long)]
    prune: bool,
}

fn main() -> ExitCode {
    let args = App::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let instance = Instance::new(5)
        .with_set(50.0, [0, 1])
        .with_set(2.0, [1, 2, 3])
        .with_set(3.0, [3, 4])
        .with_set(2.0, [4, 0]);

    let config = SolverConfig::default()
        .with_epsilon(args.epsilon)
        .with_pruning(args.prune);
    let solver = DualGrowingSolver::new(config);

    match solver.solve(&instance) {
        Ok(cover) => {
            print!("Using sets: ");
            for s in &cover.sets {
                print!("S_{}\t", s);
            }
            println!();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

// Example client for the set cover gRPC service
//
// Weighted vertex cover on a small road network. Each intersection is a set
// (placing a camera there costs its weight) and each road is an element that
// must be watched by a camera at one of its two ends. Every road touches two
// intersections, so the answer is within a factor 2 of the optimum.
//
// Intersections: A(3) B(1) C(4) D(1) E(5)
// Roads: A-B, B-C, C-D, D-E, E-A, B-D

use tonic::Request;

pub mod set_cover {
    tonic::include_proto!("set_cover");
}

use set_cover::{
    set_cover_solver_client::SetCoverSolverClient, SetCoverInstance, SolutionStatus, SolverConfig,
    WeightedSet,
};

const INTERSECTIONS: [(&str, f64); 5] = [("A", 3.0), ("B", 1.0), ("C", 4.0), ("D", 1.0), ("E", 5.0)];
const ROADS: [(usize, usize); 6] = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (1, 3)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = SetCoverSolverClient::connect("http://127.0.0.1:50051").await?;

    println!("=== Camera Placement (weighted vertex cover) ===\n");

    let sets = INTERSECTIONS
        .iter()
        .enumerate()
        .map(|(v, &(_, cost))| WeightedSet {
            cost,
            elements: ROADS
                .iter()
                .enumerate()
                .filter(|&(_, &(a, b))| a == v || b == v)
                .map(|(road, _)| road as i64)
                .collect(),
        })
        .collect();

    let instance = SetCoverInstance {
        name: "camera_placement".to_string(),
        element_count: ROADS.len() as u64,
        sets,
        solver_config: Some(SolverConfig {
            epsilon: 1e-6,
            prune_redundant: true,
            verbose: false,
        }),
    };

    let report = client.validate(Request::new(instance.clone())).await?.into_inner();
    if !report.is_valid {
        println!("Instance rejected: {}", report.errors.join("; "));
        return Ok(());
    }
    for warning in &report.warnings {
        println!("Warning: {}", warning);
    }

    let result = client.solve(Request::new(instance)).await?.into_inner();

    match SolutionStatus::try_from(result.status) {
        Ok(SolutionStatus::Feasible) => {
            let names: Vec<&str> = result
                .selected_sets
                .iter()
                .map(|&s| INTERSECTIONS[s as usize].0)
                .collect();
            println!("Cameras at: {}", names.join(", "));
            println!("Total cost: {}", result.total_cost);
            println!("Dual lower bound: {}", result.dual_bound);
            println!("Max frequency: {}", result.max_frequency);
            if let Some(stats) = result.statistics {
                println!(
                    "Solver: {} ({} tight sets, {} pruned, {:.3} ms)",
                    stats.solver_name, stats.tight_sets, stats.pruned_sets, stats.solve_time_ms
                );
            }
        }
        Ok(SolutionStatus::Infeasible) => {
            println!(
                "Infeasible: road {:?} has no intersection",
                result.uncovered_element
            );
        }
        _ => println!("Solve failed: {}", result.message),
    }

    Ok(())
}

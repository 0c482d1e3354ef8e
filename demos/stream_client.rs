// Example: large instance sent through the streaming endpoint
//
// Sensor coverage on a grid. Each of the GRID x GRID cells must be observed,
// and a sensor placed on a cell observes it and its four neighbours. Sensor
// costs vary with a simple deterministic pattern. The instance has one set
// per cell, which is too many to comfortably build as a single message, so
// the header and the sets are streamed one chunk at a time.

use futures::stream;
use tonic::Request;

pub mod set_cover {
    tonic::include_proto!("set_cover");
}

use set_cover::{
    instance_chunk::Chunk, set_cover_solver_client::SetCoverSolverClient, InstanceChunk,
    InstanceHeader, SolutionStatus, WeightedSet,
};

const GRID: i64 = 40;

fn sensor(row: i64, col: i64) -> WeightedSet {
    let elements = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)]
        .iter()
        .map(|&(dr, dc)| (row + dr, col + dc))
        .filter(|&(r, c)| (0..GRID).contains(&r) && (0..GRID).contains(&c))
        .map(|(r, c)| r * GRID + c)
        .collect();

    WeightedSet {
        cost: 1.0 + ((row * 7 + col * 13) % 5) as f64,
        elements,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = SetCoverSolverClient::connect("http://127.0.0.1:50051").await?;

    println!("=== Sensor Placement on a {}x{} grid (streaming) ===\n", GRID, GRID);

    let header = InstanceChunk {
        chunk: Some(Chunk::Header(InstanceHeader {
            name: "sensor_grid".to_string(),
            element_count: (GRID * GRID) as u64,
            solver_config: None,
        })),
    };

    let chunks: Vec<InstanceChunk> = std::iter::once(header)
        .chain((0..GRID * GRID).map(|cell| InstanceChunk {
            chunk: Some(Chunk::Set(sensor(cell / GRID, cell % GRID))),
        }))
        .collect();

    println!("Sending {} chunks...", chunks.len());

    let result = client
        .solve_stream(Request::new(stream::iter(chunks)))
        .await?
        .into_inner();

    match SolutionStatus::try_from(result.status) {
        Ok(SolutionStatus::Feasible) => {
            println!("Sensors placed: {}", result.selected_sets.len());
            println!("Total cost: {:.1}", result.total_cost);
            println!("Dual lower bound: {:.1}", result.dual_bound);
            println!(
                "Guaranteed within {}x of optimal, observed ratio to bound {:.2}",
                result.max_frequency,
                result.total_cost / result.dual_bound
            );
        }
        _ => println!("Solve failed: {}", result.message),
    }

    Ok(())
}

//! Basic example of using the CVRP greedy library.
//!
//! Loads an instance from a JSON file (or generates a grid), runs the chosen
//! strategies and validates every solution.
//!
//! ```text
//! cargo run --example basic -- --strategy all --side 20
//! cargo run --example basic -- instance.json --strategy furthest-first-two-sided
//! ```

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::info;

use cvrp_greedy::{
    validate, Config, Coord2D, EdgeWeightType, ProblemInstance, SolveOutcome, Strategy,
};

#[derive(Debug, Parser)]
#[command(about = "Build CVRP routes with the greedy strategies")]
struct Args {
    /// JSON encoded problem instance; a generated grid is used when omitted
    instance: Option<PathBuf>,

    /// Strategy name, or "all"
    #[arg(short, long, default_value = "all")]
    strategy: String,

    /// Side length of the generated grid
    #[arg(long, default_value_t = 12)]
    side: usize,

    /// Vehicle capacity of the generated grid
    #[arg(long, default_value_t = 20)]
    capacity: i64,

    /// Node count at which a spatial region is split
    #[arg(long, default_value_t = 500)]
    tiling_capacity: usize,

    /// Print the spatial partition of a 2D instance
    #[arg(long)]
    show_regions: bool,
}

fn load_instance(path: &PathBuf) -> Result<ProblemInstance, Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// `side` x `side` grid with the depot in the middle and demand 1..=5.
fn grid_instance(side: usize, capacity: i64) -> ProblemInstance {
    let coords: Vec<Coord2D> = (0..side * side)
        .map(|i| Coord2D::new((i % side) as f64 * 10.0, (i / side) as f64 * 10.0))
        .collect();
    let depot = (side / 2) * side + side / 2;
    let demand = (0..coords.len())
        .map(|node| if node == depot { 0 } else { (node % 5) as i64 + 1 })
        .collect();
    ProblemInstance::from_coords_2d(
        format!("grid-{side}x{side}"),
        coords,
        EdgeWeightType::EUC_2D,
        demand,
        [depot],
        capacity,
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let instance = match &args.instance {
        Some(path) => {
            println!("Loading problem from: {}", path.display());
            load_instance(path)?
        }
        None => grid_instance(args.side, args.capacity),
    };
    println!(
        "Loaded problem: {} with {} consumers",
        instance.name,
        instance.consumers().len()
    );

    let strategies: Vec<Strategy> = if args.strategy == "all" {
        Strategy::ALL.to_vec()
    } else {
        vec![args.strategy.parse()?]
    };
    let config = Config::new().with_tiling_capacity(args.tiling_capacity);

    if args.show_regions {
        if let Some(coords) = &instance.node_coords_2d {
            print!("{}", cvrp_greedy::SpatialIndex::build(coords, &config));
        }
    }

    for strategy in strategies {
        let start_time = Instant::now();
        let outcome = strategy.outcome(&instance, &config);
        let runtime_ms = start_time.elapsed().as_secs_f64() * 1000.0;
        let name = strategy.name();

        match outcome {
            SolveOutcome::Solved(solution) => {
                let status = match validate(&instance, &solution) {
                    Ok(()) => "valid".to_string(),
                    Err(err) => format!("invalid: {err}"),
                };
                println!(
                    "{name:<28} cost {:>8}  routes {:>4}  {runtime_ms:>9.3}ms  {status}",
                    solution.cost,
                    solution.route_count(),
                );
                info!("{strategy}: {solution:?}");
            }
            SolveOutcome::NotApplicable(reason) => {
                println!("{name:<28} skipped: {reason}");
            }
            SolveOutcome::Misconfigured(reason) => {
                println!("{name:<28} failed: {reason}");
            }
        }
    }

    Ok(())
}

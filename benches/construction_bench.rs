//! Benchmarks for the route construction strategies.

#[cfg(feature = "bench")]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cvrp_greedy::{Config, Coord2D, EdgeWeightType, ProblemInstance, SpatialIndex, Strategy};

/// Create a benchmark problem with `size` consumers on a grid.
fn create_benchmark_problem(size: usize) -> ProblemInstance {
    let grid_size = (size as f64).sqrt().ceil() as usize;

    // Depot first, then the customers row by row
    let mut coords = vec![Coord2D::new(-10.0, -10.0)];
    coords.extend((0..size).map(|i| {
        let row = i / grid_size;
        let col = i % grid_size;
        Coord2D::new(col as f64 * 10.0, row as f64 * 10.0)
    }));

    let demand = (0..=size)
        .map(|node| if node == 0 { 0 } else { (node % 7) as i64 + 1 })
        .collect();

    ProblemInstance::from_coords_2d(
        format!("BenchProblem_{}", size),
        coords,
        EdgeWeightType::EUC_2D,
        demand,
        [0],
        50,
    )
}

#[cfg(feature = "bench")]
fn benchmark_strategies(c: &mut Criterion) {
    for strategy in Strategy::ALL {
        let mut group = c.benchmark_group(strategy.name());

        for size in [100, 500, 2000].iter() {
            let problem = create_benchmark_problem(*size);
            let config = Config::new().with_tiling_capacity(64);

            group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
                b.iter(|| strategy.solve_with(black_box(&problem), &config));
            });
        }

        group.finish();
    }
}

#[cfg(feature = "bench")]
fn benchmark_spatial_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_index_build");

    for tiling_capacity in [16, 64, 500].iter() {
        let problem = create_benchmark_problem(5000);
        let coords = problem.node_coords_2d.unwrap_or_default();
        let config = Config::new().with_tiling_capacity(*tiling_capacity);

        group.bench_with_input(
            BenchmarkId::from_parameter(tiling_capacity),
            tiling_capacity,
            |b, _| {
                b.iter(|| SpatialIndex::build(black_box(&coords), &config));
            },
        );
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(benches, benchmark_strategies, benchmark_spatial_index);

#[cfg(feature = "bench")]
criterion_main!(benches);

//! Randomised checks that hold for every strategy on every instance.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cvrp_greedy::{
    validate, Config, Coord2D, EdgeWeightType, EdgeWeights, ProblemInstance, Solution, Strategy,
};

const CAPACITY: i64 = 30;

/// Random 2-D instance with depot 0 and `size - 1` consumers.
fn create_random_problem(rng: &mut ChaCha8Rng, size: usize) -> ProblemInstance {
    let coords: Vec<Coord2D> = (0..size)
        .map(|_| Coord2D::new(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
        .collect();
    let demand = random_demand(rng, size);
    ProblemInstance::from_coords_2d(
        "Random",
        coords,
        EdgeWeightType::EUC_2D,
        demand,
        [0],
        CAPACITY,
    )
}

fn random_demand(rng: &mut ChaCha8Rng, size: usize) -> Vec<i64> {
    (0..size)
        .map(|node| if node == 0 { 0 } else { rng.gen_range(1..=10) })
        .collect()
}

/// Every consumer is visited exactly once and no route is overloaded.
fn assert_feasible_cover(problem: &ProblemInstance, solution: &Solution, label: &str) {
    let dimension = problem.dimension.unwrap();
    let demand = problem.demand.as_ref().unwrap();

    let mut visits = vec![0usize; dimension];
    for route in &solution.routes {
        assert!(!route.is_empty(), "{label}: empty route");
        assert!(route.load(demand) <= CAPACITY, "{label}: overloaded route");
        for &node in &route.customers {
            visits[node] += 1;
        }
    }
    assert_eq!(visits[0], 0, "{label}: depot listed in a route");
    assert!(
        visits[1..].iter().all(|&count| count == 1),
        "{label}: consumer coverage {visits:?}"
    );

    validate(problem, solution).unwrap_or_else(|err| panic!("{label}: {err}"));
}

#[test]
fn test_all_strategies_on_random_instances() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for round in 0..10 {
        let size = rng.gen_range(2..60);
        let problem = create_random_problem(&mut rng, size);

        for strategy in Strategy::ALL {
            let label = format!("round {round}, {strategy}");
            let solution = strategy.solve(&problem).unwrap();
            assert_feasible_cover(&problem, &solution, &label);
        }
    }
}

#[test]
fn test_spatial_with_fine_tiling() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let config = Config::new().with_tiling_capacity(3);

    for round in 0..5 {
        let problem = create_random_problem(&mut rng, 120);
        let solution = Strategy::SpatialAcceleratedGreedy
            .solve_with(&problem, &config)
            .unwrap();
        assert_feasible_cover(&problem, &solution, &format!("round {round}"));
    }
}

#[test]
fn test_strategies_are_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let problem = create_random_problem(&mut rng, 80);
    let config = Config::new().with_tiling_capacity(8);

    for strategy in Strategy::ALL {
        let first = strategy.solve_with(&problem, &config).unwrap();
        let second = strategy.solve_with(&problem, &config).unwrap();
        assert_eq!(first, second, "{strategy}");
    }
}

#[test]
fn test_explicit_weight_instances() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let size = 30;

    // Symmetric lower-row table
    let mut lower = EdgeWeights::lower_row(size);
    for row in 1..size {
        for col in 0..row {
            lower.set(row, col, rng.gen_range(1..500));
        }
    }

    // Asymmetric full matrix
    let mut full = EdgeWeights::full_matrix(size);
    for from in 0..size {
        for to in 0..size {
            if from != to {
                full.set(from, to, rng.gen_range(1..500));
            }
        }
    }

    for weights in [lower, full] {
        let problem = ProblemInstance::new("Explicit")
            .with_dimension(size)
            .with_capacity(CAPACITY)
            .with_demand(random_demand(&mut rng, size))
            .with_depots([0])
            .with_edge_weight_type(EdgeWeightType::EXPLICIT)
            .with_edge_weights(weights);

        for strategy in [
            Strategy::SimpleGreedy,
            Strategy::DepotAwareGreedy,
            Strategy::FurthestFirstTwoSided,
        ] {
            let solution = strategy.solve(&problem).unwrap();
            assert_feasible_cover(&problem, &solution, strategy.name());
        }
        assert!(Strategy::SpatialAcceleratedGreedy
            .solve(&problem)
            .unwrap_err()
            .is_not_applicable());
    }
}

#[test]
fn test_multi_depot_random_instances() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut problem = create_random_problem(&mut rng, 40);
    problem.depots = Some([0, 1, 2].into_iter().collect());
    if let Some(demand) = problem.demand.as_mut() {
        demand[1] = 0;
        demand[2] = 0;
    }

    for strategy in [Strategy::SimpleGreedy, Strategy::DepotAwareGreedy] {
        let solution = strategy.solve(&problem).unwrap();
        let mut seen: Vec<usize> = solution.customers().collect();
        seen.sort_unstable();
        assert_eq!(seen, (3..40).collect::<Vec<_>>(), "{strategy}");
        for route in &solution.routes {
            assert!(route.load(problem.demand.as_ref().unwrap()) <= CAPACITY);
        }
    }
}

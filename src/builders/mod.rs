//! Greedy route construction strategies.

pub mod depot_aware;
pub mod furthest_first;
pub mod simple;
pub mod spatial;

pub use self::depot_aware::DepotAwareGreedy;
pub use self::furthest_first::FurthestFirstTwoSided;
pub use self::simple::SimpleGreedy;
pub use self::spatial::SpatialAcceleratedGreedy;

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::error::Result;
use crate::problem::{CheckedInstance, ProblemInstance};
use crate::solution::{Route, Solution};

/// Common contract of the construction strategies.
pub trait RouteBuilder {
    /// Build a solution for `instance`.
    ///
    /// Fails with a configuration error when the instance cannot be solved at
    /// all, and with a not-applicable error when it lacks the structure this
    /// particular strategy needs.
    fn solve(&self, instance: &ProblemInstance) -> Result<Solution>;
}

/// A node chosen by a closest-candidate scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub node: usize,
    /// Value the candidates were ranked by
    pub score: i64,
    /// Travel cost actually charged for the leg
    pub cost: i64,
}

/// Closest target to `start` whose demand fits `remaining_capacity`.
///
/// Candidates are ranked by `distance(start, target) + bias[target]`; the
/// first one found wins ties.
pub(crate) fn closest_node<'a>(
    instance: &CheckedInstance<'_>,
    start: usize,
    targets: impl IntoIterator<Item = &'a usize>,
    remaining_capacity: i64,
    bias: &[i64],
) -> Option<Candidate> {
    let mut closest: Option<Candidate> = None;
    for &target in targets {
        if instance.demand[target] > remaining_capacity {
            continue;
        }
        let cost = instance.distance(start, target);
        let score = cost + bias[target];
        if closest.map_or(true, |best| best.score > score) {
            closest = Some(Candidate {
                node: target,
                score,
                cost,
            });
        }
    }
    closest
}

/// Nearest-neighbour walk shared by the simple and the depot-aware builders.
///
/// Each route is seeded from whichever depot has the best-scoring reachable
/// node, extended greedily until nothing fits, and closed at the nearest
/// depot. With a zero `bias` this is the plain nearest-neighbour heuristic.
pub(crate) fn greedy_walk(instance: &CheckedInstance<'_>, bias: &[i64]) -> Solution {
    let mut remaining: BTreeSet<usize> = instance.consumers().collect();
    let mut solution = Solution::new();

    while !remaining.is_empty() {
        let mut seed: Option<Candidate> = None;
        for &depot in instance.depots {
            let Some(closest) = closest_node(instance, depot, &remaining, instance.capacity, bias)
            else {
                continue;
            };
            if seed.map_or(true, |best| best.score > closest.score) {
                seed = Some(closest);
            }
        }

        let Some(seed) = seed else {
            warn!(
                "no route can be seeded, {} nodes stay unassigned",
                remaining.len()
            );
            return solution;
        };

        let mut node = seed.node;
        let mut remaining_capacity = instance.capacity;
        let mut route = Route::new();
        solution.cost += seed.cost;

        loop {
            remaining_capacity -= instance.demand[node];
            remaining.remove(&node);
            route.customers.push(node);

            match closest_node(instance, node, &remaining, remaining_capacity, bias) {
                Some(next) => {
                    solution.cost += next.cost;
                    node = next.node;
                }
                None => break,
            }
        }

        // Depots carry no demand limit on the way back.
        let Some(back) = closest_node(instance, node, instance.depots, i64::MAX, bias) else {
            return solution;
        };
        solution.cost += back.cost;

        debug!(
            "route #{} closed with {} nodes, load {}",
            solution.routes.len() + 1,
            route.len(),
            instance.capacity - remaining_capacity
        );
        solution.routes.push(route);
    }

    solution
}

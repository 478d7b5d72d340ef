//! Nearest-neighbour construction biased toward the depots.

use log::info;

use super::{greedy_walk, RouteBuilder};
use crate::error::Result;
use crate::problem::ProblemInstance;
use crate::solution::Solution;

/// Nearest-neighbour variant that ranks each candidate by the leg to it plus
/// its distance back to the closest depot.
///
/// The bias only steers the choice; the solution cost charges the raw legs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepotAwareGreedy;

impl RouteBuilder for DepotAwareGreedy {
    fn solve(&self, instance: &ProblemInstance) -> Result<Solution> {
        let checked = instance.check()?;

        let bias: Vec<i64> = (0..checked.dimension)
            .map(|node| {
                if checked.is_depot(node) {
                    0
                } else {
                    checked
                        .depots
                        .iter()
                        .map(|&depot| checked.distance(node, depot))
                        .min()
                        .unwrap_or(0)
                }
            })
            .collect();

        let solution = greedy_walk(&checked, &bias);
        info!(
            "depot-aware greedy: {} routes, cost {}",
            solution.route_count(),
            solution.cost
        );
        Ok(solution)
    }
}

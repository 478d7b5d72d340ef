//! Plain nearest-neighbour construction.

use log::info;

use super::{greedy_walk, RouteBuilder};
use crate::error::Result;
use crate::problem::ProblemInstance;
use crate::solution::Solution;

/// Always drives to the closest unassigned node that still fits the vehicle.
///
/// A route starts at whichever depot is closest to some unassigned node and
/// ends at the depot closest to its last node. If no route can be seeded while
/// nodes remain (a node heavier than the capacity, say) the routes built so
/// far are returned as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleGreedy;

impl RouteBuilder for SimpleGreedy {
    fn solve(&self, instance: &ProblemInstance) -> Result<Solution> {
        let checked = instance.check()?;
        let bias = vec![0; checked.dimension];

        let solution = greedy_walk(&checked, &bias);
        info!(
            "simple greedy: {} routes, cost {}",
            solution.route_count(),
            solution.cost
        );
        Ok(solution)
    }
}

//! Nearest-neighbour construction accelerated by a space partition.

use log::{debug, info, warn};

use super::RouteBuilder;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::problem::ProblemInstance;
use crate::solution::{Route, Solution};
use crate::spatial::SpatialIndex;

/// Greedy walk that only looks for the next node inside the current node's
/// region of a [`SpatialIndex`], widening to parent regions when nothing fits.
///
/// Requires 2-D coordinates and exactly one depot.
#[derive(Debug, Clone, Default)]
pub struct SpatialAcceleratedGreedy {
    pub config: Config,
}

impl SpatialAcceleratedGreedy {
    pub fn new(config: Config) -> Self {
        SpatialAcceleratedGreedy { config }
    }
}

impl RouteBuilder for SpatialAcceleratedGreedy {
    fn solve(&self, instance: &ProblemInstance) -> Result<Solution> {
        let checked = instance.check()?;

        let coords = instance
            .node_coords_2d
            .as_deref()
            .ok_or_else(|| Error::not_applicable("this solver requires 2D coordinates"))?;
        let depot = checked
            .single_depot()
            .ok_or_else(|| Error::not_applicable("this solver requires exactly one depot"))?;

        let mut index = SpatialIndex::build(coords, &self.config);
        let depot_region = index.region_of(depot);
        index.remove(depot);

        let mut solution = Solution::new();

        while !index.is_empty() {
            let mut region = depot_region;
            let mut remaining_capacity = checked.capacity;
            let mut position = depot;
            let mut route = Route::new();

            while remaining_capacity > 0 {
                let Some((node, dist)) = index.nearest(
                    region,
                    position,
                    checked.demand,
                    remaining_capacity,
                    |from, to| checked.distance(from, to),
                ) else {
                    break;
                };

                position = node;
                region = index.region_of(position);
                route.customers.push(position);
                solution.cost += dist;
                remaining_capacity -= checked.demand[position];

                index.remove(position);
            }

            if route.is_empty() {
                warn!(
                    "no route can be seeded, {} nodes stay unassigned",
                    index.len()
                );
                break;
            }

            solution.cost += checked.distance(position, depot);
            debug!(
                "route #{} closed with {} nodes, {} nodes left in the index",
                solution.routes.len() + 1,
                route.len(),
                index.len()
            );
            solution.routes.push(route);
        }

        info!(
            "spatial greedy: {} routes, cost {}, {} regions",
            solution.route_count(),
            solution.cost,
            index.region_count()
        );
        Ok(solution)
    }
}

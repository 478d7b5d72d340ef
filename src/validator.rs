//! Independent cost and feasibility check of a CVRP solution.

use log::debug;

use crate::error::{Error, Result};
use crate::problem::ProblemInstance;
use crate::solution::Solution;

/// Recompute the cost of `solution` and check it against `instance`.
///
/// Checks run in order and the first violation is returned:
/// the instance must not declare several depots and must pass
/// [`ProblemInstance::check`]; every route must be non-empty; every node must
/// not be the depot, must be below the dimension and must not appear anywhere
/// earlier; the
/// running demand of a route must stay within the capacity. Finally the
/// recomputed cost, including the depot legs, must equal `solution.cost`.
pub fn validate(instance: &ProblemInstance, solution: &Solution) -> Result<()> {
    if instance.depots.as_ref().map_or(false, |depots| depots.len() > 1) {
        return Err(Error::configuration("instance has multiple depots defined"));
    }
    let checked = instance.check()?;
    let depot = checked
        .single_depot()
        .ok_or_else(|| Error::configuration("instance has multiple depots defined"))?;

    let mut used = vec![false; checked.dimension];
    let mut cost: i64 = 0;

    for (route_idx, route) in solution.routes.iter().enumerate() {
        if route.is_empty() {
            return Err(Error::EmptyRoute { route: route_idx });
        }

        let mut prev = depot;
        let mut demand: i64 = 0;
        for (position, &node) in route.customers.iter().enumerate() {
            if node == depot {
                return Err(Error::DepotInRoute {
                    route: route_idx,
                    position,
                    node,
                });
            }
            if node >= checked.dimension {
                return Err(Error::NodeOutOfRange {
                    route: route_idx,
                    position,
                    node,
                    dimension: checked.dimension,
                });
            }
            if used[node] {
                return Err(Error::DuplicateNode {
                    route: route_idx,
                    position,
                    node,
                });
            }
            used[node] = true;

            demand += checked.demand[node];
            if demand > checked.capacity {
                return Err(Error::CapacityExceeded {
                    route: route_idx,
                    position,
                    demand,
                    capacity: checked.capacity,
                });
            }

            cost += checked.distance(prev, node);
            prev = node;
        }

        cost += checked.distance(prev, depot);
    }

    if cost != solution.cost {
        return Err(Error::CostMismatch {
            declared: solution.cost,
            calculated: cost,
        });
    }

    debug!(
        "validated {} routes covering {} nodes, cost {}",
        solution.route_count(),
        solution.customer_count(),
        cost
    );
    Ok(())
}

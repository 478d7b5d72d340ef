//! Two-sided construction seeded at the node furthest from the depot.

use std::cmp::Reverse;
use std::collections::VecDeque;

use itertools::Itertools;
use log::{debug, info};

use super::RouteBuilder;
use crate::error::{Error, Result};
use crate::problem::{CheckedInstance, ProblemInstance};
use crate::solution::{Route, Solution};

/// Seeds every route with the unassigned node furthest from the depot and
/// grows it at both ends.
///
/// Each step picks, over all unassigned nodes that fit, the one minimising
/// `distance(end, node) - demand(node)` where `end` is the closer of the two
/// route ends, and attaches it there. Requires exactly one depot.
#[derive(Debug, Clone, Copy, Default)]
pub struct FurthestFirstTwoSided;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy)]
struct Extension {
    node: usize,
    end: End,
}

impl RouteBuilder for FurthestFirstTwoSided {
    fn solve(&self, instance: &ProblemInstance) -> Result<Solution> {
        let checked = instance.check()?;
        let depot = checked
            .single_depot()
            .ok_or_else(|| Error::not_applicable("this solver requires exactly one depot"))?;

        let mut solution = Solution::new();
        if checked.dimension <= 1 {
            return Ok(solution);
        }

        // Stable sort: equally distant nodes keep ascending id order.
        let by_depot_distance: Vec<usize> = checked
            .consumers()
            .sorted_by_key(|&node| Reverse(checked.distance(node, depot)))
            .collect();

        let mut used = vec![false; checked.dimension];
        used[depot] = true;

        let mut offset = 0;
        while offset < by_depot_distance.len() {
            let seed = by_depot_distance[offset];
            let mut path = VecDeque::from([seed]);
            used[seed] = true;
            let mut remaining_capacity = checked.capacity - checked.demand[seed];

            while let Some(extension) = best_extension(&checked, &used, &path, remaining_capacity) {
                match extension.end {
                    End::Front => path.push_front(extension.node),
                    End::Back => path.push_back(extension.node),
                }
                used[extension.node] = true;
                remaining_capacity -= checked.demand[extension.node];
            }

            let route = Route::from(Vec::from(path));
            let cost = route.cost(&checked, depot);
            solution.cost += cost;
            debug!(
                "route #{} seeded at {} with {} nodes, cost {}",
                solution.routes.len() + 1,
                seed,
                route.len(),
                cost
            );
            solution.routes.push(route);

            while offset < by_depot_distance.len() && used[by_depot_distance[offset]] {
                offset += 1;
            }
        }

        info!(
            "furthest-first two-sided: {} routes, cost {}",
            solution.route_count(),
            solution.cost
        );
        Ok(solution)
    }
}

/// Best unassigned node to attach to either end of `path`, if any fits.
fn best_extension(
    instance: &CheckedInstance<'_>,
    used: &[bool],
    path: &VecDeque<usize>,
    remaining_capacity: i64,
) -> Option<Extension> {
    let (&front, &back) = (path.front()?, path.back()?);

    let mut best: Option<(Extension, i64)> = None;
    for node in (0..used.len()).filter(|&node| !used[node]) {
        let demand = instance.demand[node];
        if demand > remaining_capacity {
            continue;
        }
        let to_front = instance.distance(front, node);
        let to_back = instance.distance(back, node);
        // Ties go to the back, except on a one-node path where both ends coincide.
        let (end, dist) = if to_front < to_back || front == back {
            (End::Front, to_front)
        } else {
            (End::Back, to_back)
        };
        let score = dist - demand;
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((Extension { node, end }, score));
        }
    }
    best.map(|(extension, _)| extension)
}

//! Solution representation for the CVRP.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::problem::CheckedInstance;

/// One vehicle's visit order between two depot stops.
///
/// Holds 0-based consumer node indices; depots are implicit at both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub customers: Vec<usize>,
}

impl Route {
    /// Create a new, empty route.
    pub fn new() -> Self {
        Route::default()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Total demand of the route.
    pub fn load(&self, demand: &[i64]) -> i64 {
        self.customers.iter().map(|&customer| demand[customer]).sum()
    }

    /// Travel cost of the route starting and ending at `depot`.
    pub fn cost(&self, instance: &CheckedInstance<'_>, depot: usize) -> i64 {
        let (Some(&first), Some(&last)) = (self.customers.first(), self.customers.last()) else {
            return 0;
        };
        instance.distance(depot, first)
            + path_cost(instance, &self.customers)
            + instance.distance(last, depot)
    }
}

impl From<Vec<usize>> for Route {
    fn from(customers: Vec<usize>) -> Self {
        Route { customers }
    }
}

/// Sum of the consecutive legs along `nodes`.
pub(crate) fn path_cost(instance: &CheckedInstance<'_>, nodes: &[usize]) -> i64 {
    nodes
        .iter()
        .tuple_windows()
        .map(|(&from, &to)| instance.distance(from, to))
        .sum()
}

/// A complete set of routes with its declared travel cost.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// The list of routes
    pub routes: Vec<Route>,
    /// Sum of all legs, including depot departures and returns
    pub cost: i64,
}

impl Solution {
    /// Create a new, empty solution.
    pub fn new() -> Self {
        Solution::default()
    }

    /// Create a solution from explicit routes and a declared cost.
    pub fn from_routes(routes: Vec<Vec<usize>>, cost: i64) -> Self {
        Solution {
            routes: routes.into_iter().map(Route::from).collect(),
            cost,
        }
    }

    /// Get the number of routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Number of nodes visited across all routes.
    pub fn customer_count(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// All visited nodes in route order.
    pub fn customers(&self) -> impl Iterator<Item = usize> + '_ {
        self.routes.iter().flat_map(|route| route.customers.iter().copied())
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution:")?;
        writeln!(f, "  Cost: {}", self.cost)?;
        writeln!(f, "  Routes: {}", self.routes.len())?;

        for (i, route) in self.routes.iter().enumerate() {
            writeln!(f, "  Route {}: {:?}", i, route.customers)?;
        }

        Ok(())
    }
}

//! Problem definition and data structures for CVRP.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::distance::{Distance, EdgeWeightType};
use crate::error::{Error, Result};
use crate::weights::EdgeWeights;

/// A node position in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord2D {
    pub x: f64,
    pub y: f64,
}

impl Coord2D {
    pub fn new(x: f64, y: f64) -> Self {
        Coord2D { x, y }
    }
}

/// A node position in space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Coord3D { x, y, z }
    }
}

/// A parsed CVRP instance.
///
/// Fields mirror what a problem file may or may not declare, so every piece
/// is optional here and [`ProblemInstance::check`] decides whether the
/// instance can be solved. Nodes are indexed `0..dimension`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    pub name: String,
    pub dimension: Option<usize>,
    pub capacity: Option<i64>,
    pub demand: Option<Vec<i64>>,
    pub depots: Option<BTreeSet<usize>>,
    pub edge_weight_type: Option<EdgeWeightType>,
    pub edge_weights: Option<EdgeWeights>,
    pub node_coords_2d: Option<Vec<Coord2D>>,
    pub node_coords_3d: Option<Vec<Coord3D>>,
}

impl ProblemInstance {
    /// Create an empty instance with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        ProblemInstance {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a fully populated 2-D instance.
    ///
    /// `dimension` is taken from the coordinate count.
    pub fn from_coords_2d(
        name: impl Into<String>,
        coords: Vec<Coord2D>,
        kind: EdgeWeightType,
        demand: Vec<i64>,
        depots: impl IntoIterator<Item = usize>,
        capacity: i64,
    ) -> Self {
        ProblemInstance::new(name)
            .with_dimension(coords.len())
            .with_capacity(capacity)
            .with_demand(demand)
            .with_depots(depots)
            .with_edge_weight_type(kind)
            .with_node_coords_2d(coords)
    }

    /// Set the node count.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Set the vehicle capacity.
    pub fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the demand per node.
    pub fn with_demand(mut self, demand: Vec<i64>) -> Self {
        self.demand = Some(demand);
        self
    }

    /// Set the depot nodes.
    pub fn with_depots(mut self, depots: impl IntoIterator<Item = usize>) -> Self {
        self.depots = Some(depots.into_iter().collect());
        self
    }

    /// Set the edge weight type.
    pub fn with_edge_weight_type(mut self, kind: EdgeWeightType) -> Self {
        self.edge_weight_type = Some(kind);
        self
    }

    /// Set an explicit weight table.
    pub fn with_edge_weights(mut self, weights: EdgeWeights) -> Self {
        self.edge_weights = Some(weights);
        self
    }

    /// Set 2-D node coordinates.
    pub fn with_node_coords_2d(mut self, coords: Vec<Coord2D>) -> Self {
        self.node_coords_2d = Some(coords);
        self
    }

    /// Set 3-D node coordinates.
    pub fn with_node_coords_3d(mut self, coords: Vec<Coord3D>) -> Self {
        self.node_coords_3d = Some(coords);
        self
    }

    /// Whether `node` is a depot.
    pub fn is_depot(&self, node: usize) -> bool {
        self.depots
            .as_ref()
            .map_or(false, |depots| depots.contains(&node))
    }

    /// Non-depot node indices in ascending order.
    pub fn consumers(&self) -> Vec<usize> {
        let dimension = self.dimension.unwrap_or(0);
        (0..dimension).filter(|&node| !self.is_depot(node)).collect()
    }

    /// Check that the instance carries everything a builder needs.
    ///
    /// Fails with [`Error::Configuration`] naming the first missing or
    /// inconsistent piece. The distance source itself is resolved here too,
    /// so an unsupported edge weight type is reported before any solving starts.
    pub fn check(&self) -> Result<CheckedInstance<'_>> {
        let depots = self
            .depots
            .as_ref()
            .ok_or_else(|| Error::configuration("instance is required to contain depots"))?;
        if depots.is_empty() {
            return Err(Error::configuration("instance has no depot nodes defined"));
        }

        let dimension = self
            .dimension
            .ok_or_else(|| Error::configuration("instance is required to contain a dimension"))?;
        let capacity = self
            .capacity
            .ok_or_else(|| Error::configuration("instance is required to have a capacity defined"))?;
        let demand = self
            .demand
            .as_deref()
            .ok_or_else(|| Error::configuration("instance is required to have demands defined"))?;

        if (self.node_coords_2d.is_some() || self.node_coords_3d.is_some())
            && self.edge_weight_type.is_none()
        {
            return Err(Error::configuration(
                "instance has no edge weight type defined",
            ));
        }
        if self.edge_weights.is_none()
            && self.node_coords_2d.is_none()
            && self.node_coords_3d.is_none()
        {
            return Err(Error::configuration(
                "instance has no edge weights or node coordinates defined",
            ));
        }

        if demand.len() != dimension {
            return Err(Error::configuration(format!(
                "instance declares {dimension} nodes but {} demands",
                demand.len()
            )));
        }
        if let Some(&depot) = depots.iter().find(|&&depot| depot >= dimension) {
            return Err(Error::configuration(format!(
                "depot {} lies outside the {dimension} declared nodes",
                depot + 1
            )));
        }
        self.check_source_sizes(dimension)?;

        let distance = Distance::from_instance(self)?;

        Ok(CheckedInstance {
            instance: self,
            dimension,
            capacity,
            demand,
            depots,
            distance,
        })
    }

    fn check_source_sizes(&self, dimension: usize) -> Result<()> {
        if let Some(weights) = &self.edge_weights {
            if weights.size() != dimension || !weights.is_consistent() {
                return Err(Error::configuration(format!(
                    "edge weights cover {} nodes but {dimension} are declared",
                    weights.size()
                )));
            }
        }
        if let Some(coords) = &self.node_coords_2d {
            if coords.len() != dimension {
                return Err(Error::configuration(format!(
                    "instance has {} 2D coordinates but {dimension} nodes",
                    coords.len()
                )));
            }
        }
        if let Some(coords) = &self.node_coords_3d {
            if coords.len() != dimension {
                return Err(Error::configuration(format!(
                    "instance has {} 3D coordinates but {dimension} nodes",
                    coords.len()
                )));
            }
        }
        Ok(())
    }
}

/// A borrowed view of an instance that passed [`ProblemInstance::check`].
#[derive(Debug, Clone, Copy)]
pub struct CheckedInstance<'a> {
    pub instance: &'a ProblemInstance,
    pub dimension: usize,
    pub capacity: i64,
    pub demand: &'a [i64],
    pub depots: &'a BTreeSet<usize>,
    pub distance: Distance<'a>,
}

impl<'a> CheckedInstance<'a> {
    /// The only depot, or `None` when the instance has several.
    pub fn single_depot(&self) -> Option<usize> {
        match self.depots.len() {
            1 => self.depots.iter().next().copied(),
            _ => None,
        }
    }

    pub fn is_depot(&self, node: usize) -> bool {
        self.depots.contains(&node)
    }

    /// Non-depot node indices in ascending order.
    pub fn consumers(&self) -> impl Iterator<Item = usize> + 'a {
        let depots = self.depots;
        (0..self.dimension).filter(move |node| !depots.contains(node))
    }

    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> i64 {
        self.distance.get(from, to)
    }
}

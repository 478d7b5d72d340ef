//! Adaptive 2-D space partition used to localise nearest-candidate search.
//!
//! Regions live in an arena and refer to each other by [`RegionId`]. A region
//! splits into four quadrants at its midpoint once it holds `tiling_capacity`
//! nodes; the tree shape is fixed after construction and only node membership
//! changes afterwards.

use std::collections::BTreeSet;
use std::fmt;

use log::trace;

use crate::config::Config;
use crate::problem::Coord2D;

/// Index of a region inside a [`SpatialIndex`].
pub type RegionId = usize;

/// Half-open axis-aligned rectangle `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Coord2D,
    pub max: Coord2D,
}

impl Bounds {
    pub fn contains(&self, point: Coord2D) -> bool {
        self.min.x <= point.x && self.min.y <= point.y && point.x < self.max.x && point.y < self.max.y
    }

    pub fn center(&self) -> Coord2D {
        Coord2D::new((self.min.x + self.max.x) / 2.0, (self.min.y + self.max.y) / 2.0)
    }

    /// The four quadrants around `cut`: low-x/low-y, high-x/low-y, low-x/high-y, high-x/high-y.
    fn quadrants(&self, cut: Coord2D) -> [Bounds; 4] {
        let (min, max) = (self.min, self.max);
        [
            Bounds { min, max: cut },
            Bounds {
                min: Coord2D::new(cut.x, min.y),
                max: Coord2D::new(max.x, cut.y),
            },
            Bounds {
                min: Coord2D::new(min.x, cut.y),
                max: Coord2D::new(cut.x, max.y),
            },
            Bounds { min: cut, max },
        ]
    }
}

/// One rectangle of the partition together with its live nodes.
#[derive(Debug, Clone)]
pub struct Region {
    bounds: Bounds,
    nodes: BTreeSet<usize>,
    parent: Option<RegionId>,
    children: Option<[RegionId; 4]>,
    depth: usize,
}

impl Region {
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Live nodes, in ascending id order.
    pub fn nodes(&self) -> &BTreeSet<usize> {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(&node)
    }

    pub fn parent(&self) -> Option<RegionId> {
        self.parent
    }

    pub fn children(&self) -> Option<[RegionId; 4]> {
        self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Region tree over a set of 2-D coordinates.
///
/// Every live node is a member of each region on the path from its deepest
/// region (see [`SpatialIndex::region_of`]) up to the root, and of no other
/// region.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    regions: Vec<Region>,
    access: Vec<RegionId>,
    tiling_capacity: usize,
    max_depth: usize,
}

impl SpatialIndex {
    pub const ROOT: RegionId = 0;

    /// Build the partition over `coords` using the tiling settings of `config`.
    pub fn build(coords: &[Coord2D], config: &Config) -> Self {
        let tiling_capacity = config.tiling_capacity.max(1);
        let bounds = match coords.split_first() {
            Some((first, rest)) => {
                let (min, max) = rest.iter().fold((*first, *first), |(min, max), pos| {
                    (
                        Coord2D::new(min.x.min(pos.x), min.y.min(pos.y)),
                        Coord2D::new(max.x.max(pos.x), max.y.max(pos.y)),
                    )
                });
                // Grow the high side so boundary points fall strictly inside.
                Bounds {
                    min,
                    max: Coord2D::new(max.x + 1.0, max.y + 1.0),
                }
            }
            None => Bounds {
                min: Coord2D::new(0.0, 0.0),
                max: Coord2D::new(0.0, 0.0),
            },
        };

        let mut index = SpatialIndex {
            regions: vec![Region {
                bounds,
                nodes: (0..coords.len()).collect(),
                parent: None,
                children: None,
                depth: 0,
            }],
            access: vec![Self::ROOT; coords.len()],
            tiling_capacity,
            max_depth: config.max_tiling_depth,
        };
        index.subdivide(Self::ROOT, coords);

        trace!(
            "built spatial index: {} nodes, {} regions, tiling capacity {}",
            coords.len(),
            index.regions.len(),
            tiling_capacity
        );
        index
    }

    fn subdivide(&mut self, id: RegionId, coords: &[Coord2D]) {
        let region = &self.regions[id];
        if region.nodes.len() < self.tiling_capacity || region.depth >= self.max_depth {
            return;
        }

        let bounds = region.bounds;
        let depth = region.depth + 1;
        let mut children = [Self::ROOT; 4];
        for (slot, quadrant) in bounds.quadrants(bounds.center()).into_iter().enumerate() {
            let nodes: BTreeSet<usize> = self.regions[id]
                .nodes
                .iter()
                .copied()
                .filter(|&node| quadrant.contains(coords[node]))
                .collect();

            let child = self.regions.len();
            for &node in &nodes {
                self.access[node] = child;
            }
            self.regions.push(Region {
                bounds: quadrant,
                nodes,
                parent: Some(id),
                children: None,
                depth,
            });
            children[slot] = child;
            self.subdivide(child, coords);
        }
        self.regions[id].children = Some(children);
    }

    pub fn root(&self) -> &Region {
        &self.regions[Self::ROOT]
    }

    pub fn region(&self, id: RegionId) -> &Region {
        &self.regions[id]
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn tiling_capacity(&self) -> usize {
        self.tiling_capacity
    }

    /// The deepest region `node` was placed in at build time.
    ///
    /// The entry stays put after [`SpatialIndex::remove`].
    pub fn region_of(&self, node: usize) -> RegionId {
        self.access[node]
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.root().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root().is_empty()
    }

    pub fn contains(&self, node: usize) -> bool {
        self.root().contains(node)
    }

    /// Iterate from `id` up to the root.
    pub fn ancestors(&self, id: RegionId) -> impl Iterator<Item = &Region> + '_ {
        std::iter::successors(Some(&self.regions[id]), move |region| {
            region.parent.map(|parent| &self.regions[parent])
        })
    }

    /// Remove `node` from its region chain.
    ///
    /// Returns `false` if the node is unknown or was already removed.
    pub fn remove(&mut self, node: usize) -> bool {
        let Some(&leaf) = self.access.get(node) else {
            return false;
        };
        let mut removed = false;
        let mut current = Some(leaf);
        while let Some(id) = current {
            let region = &mut self.regions[id];
            removed |= region.nodes.remove(&node);
            current = region.parent;
        }
        removed
    }

    /// Region-local nearest candidate.
    ///
    /// Scans the live nodes of `start` whose `demand` fits `remaining_capacity`
    /// and returns the one closest to `origin` under `distance`, first found on
    /// ties. If `start` has no eligible node the search moves to its parent,
    /// and so on up to the root. Nodes in sibling regions are only seen once
    /// the search reaches a common ancestor, so the answer is not necessarily
    /// the global nearest node.
    pub fn nearest<F>(
        &self,
        start: RegionId,
        origin: usize,
        demand: &[i64],
        remaining_capacity: i64,
        distance: F,
    ) -> Option<(usize, i64)>
    where
        F: Fn(usize, usize) -> i64,
    {
        for region in self.ancestors(start) {
            let mut closest: Option<(usize, i64)> = None;
            for &node in &region.nodes {
                if demand[node] > remaining_capacity {
                    continue;
                }
                let dist = distance(origin, node);
                if closest.map_or(true, |(_, best)| dist < best) {
                    closest = Some((node, dist));
                }
            }
            if closest.is_some() {
                return closest;
            }
        }
        None
    }

    fn write_region(&self, f: &mut fmt::Formatter<'_>, id: RegionId, indent: usize) -> fmt::Result {
        let region = &self.regions[id];
        let Bounds { min, max } = region.bounds;
        writeln!(
            f,
            "{:indent$}Space ({}): ({}, {}) - ({}, {})",
            "",
            region.len(),
            min.x,
            min.y,
            max.x,
            max.y,
            indent = indent * 2
        )?;
        if let Some(children) = region.children {
            for child in children {
                self.write_region(f, child, indent + 1)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SpatialIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_region(f, Self::ROOT, 0)
    }
}

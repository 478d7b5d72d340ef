//! Configuration parameters for the route builders.

use serde::{Deserialize, Serialize};

/// Settings for the builders that need tuning.
///
/// Only the spatial-accelerated builder reads these today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Live node count at which a spatial region splits into four quadrants
    pub tiling_capacity: usize,
    /// Depth at which regions stop splitting regardless of their node count
    pub max_tiling_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tiling_capacity: 500,
            max_tiling_depth: 32,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the tiling capacity. Values below one are treated as one.
    pub fn with_tiling_capacity(mut self, capacity: usize) -> Self {
        self.tiling_capacity = capacity;
        self
    }

    /// Set the maximum tiling depth.
    pub fn with_max_tiling_depth(mut self, depth: usize) -> Self {
        self.max_tiling_depth = depth;
        self
    }
}

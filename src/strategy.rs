//! Named selection of the construction strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::builders::{
    DepotAwareGreedy, FurthestFirstTwoSided, RouteBuilder, SimpleGreedy, SpatialAcceleratedGreedy,
};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::problem::ProblemInstance;
use crate::solution::Solution;

/// The fixed set of construction strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    SimpleGreedy,
    DepotAwareGreedy,
    SpatialAcceleratedGreedy,
    FurthestFirstTwoSided,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SimpleGreedy,
        Strategy::DepotAwareGreedy,
        Strategy::SpatialAcceleratedGreedy,
        Strategy::FurthestFirstTwoSided,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::SimpleGreedy => "simple-greedy",
            Strategy::DepotAwareGreedy => "depot-aware-greedy",
            Strategy::SpatialAcceleratedGreedy => "spatial-accelerated-greedy",
            Strategy::FurthestFirstTwoSided => "furthest-first-two-sided",
        }
    }

    /// Solve with the default [`Config`].
    pub fn solve(self, instance: &ProblemInstance) -> Result<Solution> {
        self.solve_with(instance, &Config::default())
    }

    pub fn solve_with(self, instance: &ProblemInstance, config: &Config) -> Result<Solution> {
        match self {
            Strategy::SimpleGreedy => SimpleGreedy.solve(instance),
            Strategy::DepotAwareGreedy => DepotAwareGreedy.solve(instance),
            Strategy::SpatialAcceleratedGreedy => {
                SpatialAcceleratedGreedy::new(config.clone()).solve(instance)
            }
            Strategy::FurthestFirstTwoSided => FurthestFirstTwoSided.solve(instance),
        }
    }

    /// Like [`Strategy::solve_with`], but folds the recoverable cases into a
    /// [`SolveOutcome`] for callers sweeping many strategies.
    pub fn outcome(self, instance: &ProblemInstance, config: &Config) -> SolveOutcome {
        SolveOutcome::from(self.solve_with(instance, config))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "greedy-simple" => Ok(Strategy::SimpleGreedy),
            name => Strategy::ALL
                .into_iter()
                .find(|strategy| strategy.name() == name)
                .ok_or_else(|| Error::configuration(format!("unsupported solver \"{name}\""))),
        }
    }
}

/// Result of one solve attempt, split by how a batch caller should react.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(Solution),
    /// The strategy does not fit this instance; skip it.
    NotApplicable(String),
    /// The instance itself is unusable, or a solution check failed.
    Misconfigured(String),
}

impl SolveOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}

impl From<Result<Solution>> for SolveOutcome {
    fn from(result: Result<Solution>) -> Self {
        match result {
            Ok(solution) => SolveOutcome::Solved(solution),
            Err(Error::NotApplicable(reason)) => SolveOutcome::NotApplicable(reason),
            Err(error) => SolveOutcome::Misconfigured(error.to_string()),
        }
    }
}

//! # CVRP greedy
//!
//! Route construction for the Capacitated Vehicle Routing Problem (CVRP).
//!
//! Given an already parsed [`ProblemInstance`], one of four greedy
//! strategies partitions the consumer nodes into capacity-feasible routes and
//! reports the integer travel cost. [`validate`] recomputes that cost and
//! checks feasibility independently of how a solution was produced.
//!
//! The crate does no I/O and is fully deterministic: the same instance and
//! strategy always yield the same routes and cost.
//!
//! ```
//! use cvrp_greedy::{validate, Coord2D, EdgeWeightType, ProblemInstance, Strategy};
//!
//! let coords = vec![
//!     Coord2D::new(0.0, 0.0),
//!     Coord2D::new(1.0, 0.0),
//!     Coord2D::new(2.0, 0.0),
//!     Coord2D::new(10.0, 10.0),
//! ];
//! let instance = ProblemInstance::from_coords_2d(
//!     "line", coords, EdgeWeightType::EUC_2D, vec![0, 2, 2, 2], [0], 4,
//! );
//!
//! let solution = Strategy::SimpleGreedy.solve(&instance).unwrap();
//! assert_eq!(solution.cost, 32);
//! validate(&instance, &solution).unwrap();
//! ```

pub mod builders;
pub mod config;
pub mod distance;
pub mod error;
pub mod problem;
pub mod solution;
pub mod spatial;
pub mod strategy;
pub mod validator;
pub mod weights;

pub use crate::builders::RouteBuilder;
pub use crate::config::Config;
pub use crate::distance::{Distance, EdgeWeightType};
pub use crate::error::{Error, Result};
pub use crate::problem::{CheckedInstance, Coord2D, Coord3D, ProblemInstance};
pub use crate::solution::{Route, Solution};
pub use crate::spatial::SpatialIndex;
pub use crate::strategy::{SolveOutcome, Strategy};
pub use crate::validator::validate;
pub use crate::weights::EdgeWeights;

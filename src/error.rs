//! Error types shared by the builders and the validator.

use thiserror::Error as ThisError;

/// Typed failures raised by instance checks, route builders and the validator.
///
/// Route and position fields are 0-based; the rendered messages use 1-based
/// numbers so they line up with solution files.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The instance is missing required data or names an unsupported distance.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// A strategy's structural precondition is not met by the instance.
    #[error("solver not applicable: {0}")]
    NotApplicable(String),
    #[error("Route {}: no nodes defined", .route + 1)]
    EmptyRoute { route: usize },
    #[error("Route {}: depot {} (at {}) is not allowed to be listed", .route + 1, .node + 1, .position + 1)]
    DepotInRoute {
        route: usize,
        position: usize,
        node: usize,
    },
    #[error("Route {}: node {} (at {}) has an invalid index, dimension is {dimension}", .route + 1, .node + 1, .position + 1)]
    NodeOutOfRange {
        route: usize,
        position: usize,
        node: usize,
        dimension: usize,
    },
    #[error("Route {}: node {} (at {}) is already used on a route", .route + 1, .node + 1, .position + 1)]
    DuplicateNode {
        route: usize,
        position: usize,
        node: usize,
    },
    #[error("Route {}: demand {demand} (at {}) is higher than the capacity {capacity}", .route + 1, .position + 1)]
    CapacityExceeded {
        route: usize,
        position: usize,
        demand: i64,
        capacity: i64,
    },
    #[error("solution defines a cost of {declared} but {calculated} was calculated")]
    CostMismatch { declared: i64, calculated: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn not_applicable(message: impl Into<String>) -> Self {
        Self::NotApplicable(message.into())
    }

    /// Whether a batch caller can skip this failure and carry on with the
    /// next strategy or instance.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable(_))
    }

    /// Whether the failure came from checking a solution rather than the instance.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            Self::EmptyRoute { .. }
                | Self::DepotInRoute { .. }
                | Self::NodeOutOfRange { .. }
                | Self::DuplicateNode { .. }
                | Self::CapacityExceeded { .. }
                | Self::CostMismatch { .. }
        )
    }
}

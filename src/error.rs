//! Error types for the routing driver.

use thiserror::Error as ThisError;

/// Failure conditions reported by [`solve_vrp`](crate::solver::solve_vrp)
/// and the request boundary.
///
/// Optimizers themselves never fail for valid inputs; every variant here is
/// detected before search starts, except [`VrpError::Unexpected`], which the
/// boundary produces when an internal fault escapes.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum VrpError {
    /// Fewer than two locations were supplied.
    #[error("At least two locations are required.")]
    InsufficientInput {
        /// Number of locations actually supplied.
        found: usize,
    },
    /// The depot index does not refer to a supplied location.
    #[error("depot index {depot} is out of range for {len} locations")]
    InvalidDepot {
        /// Requested depot index.
        depot: usize,
        /// Number of locations.
        len: usize,
    },
    /// The vehicle count was zero.
    #[error("at least one vehicle is required")]
    NoVehicles,
    /// A coordinate was NaN or infinite.
    #[error("location {index} has a non-finite coordinate")]
    InvalidCoordinate {
        /// Index of the offending location.
        index: usize,
    },
    /// An optimizer configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Any other fault, carrying a descriptive message.
    #[error("{0}")]
    Unexpected(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VrpError>;

impl VrpError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

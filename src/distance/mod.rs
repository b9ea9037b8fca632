//! Euclidean distance model.
//!
//! Provides point distance, route length summation, and a dense distance
//! matrix for repeated edge lookups.

mod matrix;
mod route;

pub use matrix::DistanceMatrix;
pub use route::{euclidean, route_length};

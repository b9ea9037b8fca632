//! # u-vrp-meta
//!
//! Fleet routing from a shared depot with three metaheuristics compared per
//! vehicle: simulated annealing, tabu search, and ant colony optimization.
//!
//! ## Modules
//!
//! - [`models`] - Domain types (Location, VehicleRoute, VrpSolution)
//! - [`distance`] - Euclidean distance, route length, and distance matrix
//! - [`sa`] - Simulated annealing over customer swaps
//! - [`tabu`] - Best-improvement tabu search with FIFO swap memory
//! - [`aco`] - Ant colony tour construction with pheromone reinforcement
//! - [`solver`] - Round-robin decomposition and per-vehicle selection
//! - [`boundary`] - Request/response shapes with explicit success/failure
//! - [`error`] - Error taxonomy

pub mod aco;
pub mod boundary;
pub mod distance;
pub mod error;
pub mod models;
pub mod sa;
pub mod solver;
mod swap;
pub mod tabu;

pub use error::{Result, VrpError};

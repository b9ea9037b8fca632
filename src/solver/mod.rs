//! Fleet decomposition and per-vehicle optimizer selection.
//!
//! - [`assign_round_robin`] - customer at list position `i` goes to vehicle `i mod k`
//! - [`optimize_vehicle`] - runs SA, then tabu search from SA's route, then ACO,
//!   and keeps the shortest (ties prefer SA, then tabu)
//! - [`solve_vrp`] / [`Solver`] - validates input and aggregates routes in vehicle order

mod assignment;
mod config;
mod driver;

pub use assignment::{assign_round_robin, customer_indices};
pub use config::{AcoScope, SolverConfig};
pub use driver::{optimize_vehicle, solve_vrp, solve_vrp_with_rng, Solver};

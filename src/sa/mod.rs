//! Simulated Annealing (SA) over depot-anchored routes.
//!
//! Each iteration swaps two randomly chosen customers and accepts the result
//! if it is shorter, or otherwise with the Metropolis probability
//! `exp((current - new) / T)`. Temperature cools geometrically every
//! iteration and the run stops after a fixed iteration budget.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{anneal, SaResult};

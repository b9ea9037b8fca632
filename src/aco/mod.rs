//! Ant Colony Optimization (ACO) for closed depot tours.
//!
//! Each ant builds a tour from the depot by roulette-wheel selection over
//! `pheromone^alpha * (1 / distance)^beta`. After every iteration all
//! pheromone evaporates by `(1 - decay)` and every ant deposits
//! `1 / tour_length` on the edges it used.
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System: Optimization
//! by a Colony of Cooperating Agents", *IEEE Transactions on Systems, Man,
//! and Cybernetics, Part B* 26(1), 29-41.

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::PheromoneTable;
pub use runner::{run, run_over, AcoResult};

//! Tabu Search (TS) over depot-anchored routes.
//!
//! Every iteration scans all customer swaps, moves to the shortest one whose
//! pair is not tabu (even if it is longer than the current route), and
//! records the pair in a bounded FIFO tabu list. There is no aspiration
//! criterion: a tabu pair stays forbidden until it is evicted.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

mod config;
mod list;
mod runner;

pub use config::TabuConfig;
pub use list::TabuList;
pub use runner::{search, TabuResult};

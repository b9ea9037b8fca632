//! Domain model types for fleet routing.
//!
//! Locations are plain coordinates addressed by their index in the input
//! slice. Optimizers work on index sequences; the driver resolves the winning
//! sequence back to coordinates in a [`VehicleRoute`].

mod location;
mod solution;

pub use location::Location;
pub use solution::{Optimizer, VehicleRoute, VrpSolution};

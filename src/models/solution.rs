//! Per-vehicle routes and the aggregate solution.

use serde::{Deserialize, Serialize};

use super::Location;

/// The search that produced a vehicle's route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Optimizer {
    /// Simulated annealing.
    SimulatedAnnealing,
    /// Tabu search, seeded from the annealing result.
    TabuSearch,
    /// Ant colony optimization.
    AntColony,
    /// Zero or one customer: the route was returned without search.
    Trivial,
}

/// A closed route assigned to one vehicle.
///
/// `indices` begins and ends at the depot; `stops` holds the matching
/// coordinates in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRoute {
    vehicle_id: usize,
    indices: Vec<usize>,
    stops: Vec<Location>,
    distance: f64,
    optimizer: Optimizer,
}

impl VehicleRoute {
    /// Builds a route from location indices, resolving their coordinates.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for `locations`.
    pub fn from_indices(
        vehicle_id: usize,
        indices: Vec<usize>,
        locations: &[Location],
        distance: f64,
        optimizer: Optimizer,
    ) -> Self {
        let stops = indices.iter().map(|&i| locations[i]).collect();
        Self {
            vehicle_id,
            indices,
            stops,
            distance,
            optimizer,
        }
    }

    /// Vehicle this route belongs to.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Location indices in visit order, depot at both ends.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Coordinates in visit order, depot at both ends.
    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// Total Euclidean length of the route.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Which search produced this route.
    pub fn optimizer(&self) -> Optimizer {
        self.optimizer
    }

    /// Number of customers visited (depot occurrences excluded).
    pub fn num_customers(&self) -> usize {
        self.indices.len().saturating_sub(2)
    }
}

/// The result of routing a whole fleet.
///
/// Routes appear in vehicle order; vehicles without customers are omitted.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::models::VrpSolution;
///
/// let sol = VrpSolution::empty();
/// assert_eq!(sol.num_routes(), 0);
/// assert_eq!(sol.total_distance(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VrpSolution {
    routes: Vec<VehicleRoute>,
    total_distance: f64,
}

impl VrpSolution {
    /// A solution with no routes and zero distance.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a solution from routes, summing their distances.
    pub fn from_routes(routes: Vec<VehicleRoute>) -> Self {
        let total_distance = routes.iter().map(|r| r.distance()).sum();
        Self {
            routes,
            total_distance,
        }
    }

    /// Routes in vehicle order.
    pub fn routes(&self) -> &[VehicleRoute] {
        &self.routes
    }

    /// Number of non-empty vehicle routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Sum of all route distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Per-vehicle coordinate lists, in vehicle order.
    pub fn coordinate_routes(&self) -> Vec<Vec<Location>> {
        self.routes.iter().map(|r| r.stops().to_vec()).collect()
    }
}

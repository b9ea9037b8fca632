//! Fleet driver.
//!
//! # Algorithm
//!
//! 1. Split customers across vehicles round-robin by list position
//! 2. For each vehicle with customers, build `[depot, c₁, …, cₖ, depot]`
//! 3. Run simulated annealing, then tabu search seeded with SA's best route,
//!    then the ant colony
//! 4. Keep the shortest of the three (ties: SA, then tabu, then ACO)
//! 5. Emit routes in vehicle order and sum their lengths

use log::{debug, info};
use rand::Rng;
use u_numflow::random::create_rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::assignment::{assign_round_robin, customer_indices};
use super::config::{AcoScope, SolverConfig};
use crate::aco;
use crate::distance::route_length;
use crate::error::{Result, VrpError};
use crate::models::{Location, Optimizer, VehicleRoute, VrpSolution};
use crate::sa::anneal;
use crate::tabu::search;

/// Routes a fleet with the default configuration and a fresh random seed.
///
/// Fewer than two locations yields an empty solution with zero distance.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::models::Location;
/// use u_vrp_meta::solver::solve_vrp;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(3.0, 4.0),
///     Location::new(-3.0, 4.0),
/// ];
/// let solution = solve_vrp(&locations, 1, 0).unwrap();
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(solution.routes()[0].stops().len(), 4);
/// assert!((solution.total_distance() - 16.0).abs() < 1e-10);
/// ```
pub fn solve_vrp(locations: &[Location], num_vehicles: usize, depot: usize) -> Result<VrpSolution> {
    Solver::new(SolverConfig::default()).solve(locations, num_vehicles, depot)
}

/// Routes a fleet drawing every random decision from `rng`.
///
/// Vehicles are processed sequentially against the one generator, so a
/// deterministic `rng` reproduces the whole run. `config.seed` is ignored.
pub fn solve_vrp_with_rng<R: Rng>(
    locations: &[Location],
    num_vehicles: usize,
    depot: usize,
    config: &SolverConfig,
    rng: &mut R,
) -> Result<VrpSolution> {
    let Some(assignments) = prepare(locations, num_vehicles, depot, config)? else {
        return Ok(VrpSolution::empty());
    };

    let routes = assignments
        .iter()
        .enumerate()
        .filter(|(_, assigned)| !assigned.is_empty())
        .map(|(vehicle_id, assigned)| {
            optimize_vehicle(locations, vehicle_id, assigned, depot, config, rng)
        })
        .collect();

    Ok(finish(routes))
}

/// Seeded fleet driver.
///
/// Each vehicle gets its own generator derived from the base seed and its
/// vehicle index, so results do not depend on processing order. With the
/// `parallel` feature vehicles are routed concurrently and the output is
/// identical to a sequential run with the same seed.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The configuration this solver runs with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Routes `num_vehicles` vehicles from `depot` over `locations`.
    pub fn solve(
        &self,
        locations: &[Location],
        num_vehicles: usize,
        depot: usize,
    ) -> Result<VrpSolution> {
        let Some(assignments) = prepare(locations, num_vehicles, depot, &self.config)? else {
            return Ok(VrpSolution::empty());
        };
        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        debug!("solving with base seed {seed}");

        let route_vehicle = |(vehicle_id, assigned): (usize, &Vec<usize>)| {
            if assigned.is_empty() {
                return None;
            }
            let mut rng = create_rng(vehicle_seed(seed, vehicle_id));
            Some(optimize_vehicle(
                locations,
                vehicle_id,
                assigned,
                depot,
                &self.config,
                &mut rng,
            ))
        };

        #[cfg(feature = "parallel")]
        let routes = assignments
            .par_iter()
            .enumerate()
            .filter_map(route_vehicle)
            .collect();

        #[cfg(not(feature = "parallel"))]
        let routes = assignments
            .iter()
            .enumerate()
            .filter_map(route_vehicle)
            .collect();

        Ok(finish(routes))
    }
}

/// Routes one vehicle over its assigned customers.
///
/// With zero or one customer the depot-anchored route is returned directly
/// as [`Optimizer::Trivial`]. Otherwise SA, tabu search (from SA's best
/// route) and ACO all run, and the shortest result wins, ties preferring SA
/// over tabu over ACO.
pub fn optimize_vehicle<R: Rng>(
    locations: &[Location],
    vehicle_id: usize,
    assigned: &[usize],
    depot: usize,
    config: &SolverConfig,
    rng: &mut R,
) -> VehicleRoute {
    let mut route = Vec::with_capacity(assigned.len() + 2);
    route.push(depot);
    route.extend_from_slice(assigned);
    route.push(depot);

    if assigned.len() < 2 {
        let distance = route_length(locations, &route);
        debug!("vehicle {vehicle_id}: trivial route, distance {distance:.4}");
        return VehicleRoute::from_indices(vehicle_id, route, locations, distance, Optimizer::Trivial);
    }

    let sa = anneal(locations, &route, &config.sa, rng);
    let tabu = search(locations, &sa.best, &config.tabu);
    let colony = match config.aco_scope {
        AcoScope::AllLocations => aco::run(locations, depot, &config.aco, rng),
        AcoScope::AssignedCustomers => aco::run_over(locations, depot, assigned, &config.aco, rng),
    };

    debug!(
        "vehicle {vehicle_id}: {} customers, sa {:.4}, tabu {:.4}, aco {:.4}",
        assigned.len(),
        sa.best_distance,
        tabu.best_distance,
        colony.best_distance
    );

    let (indices, distance, optimizer) =
        if sa.best_distance <= tabu.best_distance && sa.best_distance <= colony.best_distance {
            (sa.best, sa.best_distance, Optimizer::SimulatedAnnealing)
        } else if tabu.best_distance <= sa.best_distance && tabu.best_distance <= colony.best_distance {
            (tabu.best, tabu.best_distance, Optimizer::TabuSearch)
        } else {
            (colony.best, colony.best_distance, Optimizer::AntColony)
        };

    VehicleRoute::from_indices(vehicle_id, indices, locations, distance, optimizer)
}

/// Validates input and splits customers across vehicles.
///
/// Returns `Ok(None)` when fewer than two locations were supplied.
fn prepare(
    locations: &[Location],
    num_vehicles: usize,
    depot: usize,
    config: &SolverConfig,
) -> Result<Option<Vec<Vec<usize>>>> {
    if locations.len() < 2 {
        debug!("{} location(s) supplied, nothing to route", locations.len());
        return Ok(None);
    }
    if depot >= locations.len() {
        return Err(VrpError::InvalidDepot {
            depot,
            len: locations.len(),
        });
    }
    if num_vehicles == 0 {
        return Err(VrpError::NoVehicles);
    }
    if let Some(index) = locations.iter().position(|l| !l.is_finite()) {
        return Err(VrpError::InvalidCoordinate { index });
    }
    config.validate()?;

    let customers = customer_indices(locations.len(), depot);
    let assignments = assign_round_robin(&customers, num_vehicles);
    debug!(
        "assigned {} customers to {num_vehicles} vehicles (depot {depot})",
        customers.len()
    );
    Ok(Some(assignments))
}

fn finish(routes: Vec<VehicleRoute>) -> VrpSolution {
    let solution = VrpSolution::from_routes(routes);
    info!(
        "routed {} vehicles, total distance {:.4}",
        solution.num_routes(),
        solution.total_distance()
    );
    solution
}

/// Per-vehicle seed: distinct vehicles get well-separated streams.
fn vehicle_seed(seed: u64, vehicle_id: usize) -> u64 {
    seed ^ (vehicle_id as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

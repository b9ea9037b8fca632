//! Colony execution loop.

use log::trace;
use rand::Rng;

use super::config::AcoConfig;
use super::pheromone::PheromoneTable;
use crate::distance::DistanceMatrix;
use crate::models::Location;

/// Stand-in edge length for coincident locations, keeping `1 / d` finite.
const MIN_DISTANCE: f64 = 1e-4;

/// Result of an ant colony run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Shortest tour found: depot, every customer once, depot.
    ///
    /// Empty if no ant ran (zero ants or zero iterations).
    pub best: Vec<usize>,
    /// Length of the best tour; infinite if no ant ran.
    pub best_distance: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Pheromone table after the final deposit.
    pub pheromone: PheromoneTable,
}

/// Runs the colony over every location except the depot.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::models::Location;
/// use u_vrp_meta::aco::{run, AcoConfig};
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 0.0),
///     Location::new(1.0, 1.0),
///     Location::new(0.0, 1.0),
/// ];
/// let mut rng = u_numflow::random::create_rng(42);
/// let result = run(&locations, 0, &AcoConfig::default(), &mut rng);
/// assert_eq!(result.best.len(), locations.len() + 1);
/// assert!((result.best_distance - 4.0).abs() < 1e-10);
/// ```
pub fn run<R: Rng>(
    locations: &[Location],
    depot: usize,
    config: &AcoConfig,
    rng: &mut R,
) -> AcoResult {
    let customers: Vec<usize> = (0..locations.len()).filter(|&i| i != depot).collect();
    run_over(locations, depot, &customers, config, rng)
}

/// Runs the colony over the given customers only.
///
/// Tours start at `depot`, visit each entry of `customers` exactly once, and
/// return to `depot`. The pheromone table still spans all locations.
pub fn run_over<R: Rng>(
    locations: &[Location],
    depot: usize,
    customers: &[usize],
    config: &AcoConfig,
    rng: &mut R,
) -> AcoResult {
    let distances = DistanceMatrix::from_locations(locations);
    let mut pheromone = PheromoneTable::new(locations.len());
    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut iterations = 0;

    for _ in 0..config.num_iterations {
        let tours: Vec<(Vec<usize>, f64)> = (0..config.num_ants)
            .map(|_| {
                let tour = construct_tour(&distances, &pheromone, depot, customers, config, rng);
                let length = distances.tour_length(&tour);
                (tour, length)
            })
            .collect();

        pheromone.evaporate(config.decay);
        for (tour, length) in &tours {
            // A zero-length tour has no finite reciprocal to deposit.
            if *length > 0.0 {
                pheromone.deposit(tour, 1.0 / length);
            }
        }

        for (tour, length) in tours {
            if best.as_ref().is_none_or(|(_, d)| length < *d) {
                best = Some((tour, length));
            }
        }
        iterations += 1;
    }

    let (best, best_distance) = best.unwrap_or((Vec::new(), f64::INFINITY));
    trace!(
        "aco: {iterations} iterations x {} ants over {} customers, best {best_distance:.4}",
        config.num_ants,
        customers.len()
    );

    AcoResult {
        best,
        best_distance,
        iterations,
        pheromone,
    }
}

/// Builds one closed tour by repeated roulette-wheel selection.
fn construct_tour<R: Rng>(
    distances: &DistanceMatrix,
    pheromone: &PheromoneTable,
    depot: usize,
    customers: &[usize],
    config: &AcoConfig,
    rng: &mut R,
) -> Vec<usize> {
    let mut tour = Vec::with_capacity(customers.len() + 2);
    tour.push(depot);
    let mut unvisited: Vec<usize> = customers.to_vec();
    let mut current = depot;
    let mut weights: Vec<f64> = Vec::with_capacity(unvisited.len());

    while !unvisited.is_empty() {
        weights.clear();
        weights.extend(unvisited.iter().map(|&next| {
            let d = distances.get(current, next);
            let d = if d == 0.0 { MIN_DISTANCE } else { d };
            pheromone.get(current, next).powf(config.alpha) * (1.0 / d).powf(config.beta)
        }));

        let pick = roulette(&weights, rng);
        let next = unvisited.remove(pick);
        tour.push(next);
        current = next;
    }

    tour.push(depot);
    tour
}

/// Picks an index with probability proportional to its weight.
///
/// Falls back to a uniform choice when the total weight is zero (or not a
/// usable number). `weights` must be non-empty.
fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return rng.random_range(0..weights.len());
    }

    let pick = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative >= pick {
            return i;
        }
    }
    weights.len() - 1
}

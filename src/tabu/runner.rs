//! Tabu Search execution loop.
//!
//! # Algorithm
//!
//! 1. Start from the given route; it is the initial best.
//! 2. At each iteration:
//!    a. Evaluate every swap of two customers whose pair is not tabu
//!    b. Move to the shortest such neighbor, even if it is longer
//!    c. Update the global best if improved
//!    d. Append the executed pair to the tabu list (FIFO eviction)
//! 3. Stop after the iteration budget, or when every swap is tabu

use log::trace;

use super::config::TabuConfig;
use super::list::TabuList;
use crate::distance::route_length;
use crate::models::Location;
use crate::swap::{canonical_pair, interior_customers, swap_customers};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best route found, depot anchors unchanged.
    pub best: Vec<usize>,
    /// Length of the best route. Never exceeds the initial route's length.
    pub best_distance: f64,
    /// Iterations in which a move was executed.
    pub iterations: usize,
    /// Iteration (1-based) at which the best route was found; 0 if never improved.
    pub best_iteration: usize,
    /// Tabu list as it stood when the search stopped.
    pub tabu: TabuList,
}

/// Runs tabu search from `initial_route`.
///
/// The first and last entries of the route are depot anchors. The search is
/// deterministic: ties between equally short neighbors go to the pair found
/// first when scanning customers in route order.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::models::Location;
/// use u_vrp_meta::tabu::{search, TabuConfig};
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 0.0),
///     Location::new(1.0, 1.0),
///     Location::new(0.0, 1.0),
/// ];
/// let result = search(&locations, &[0, 2, 1, 3, 0], &TabuConfig::default());
/// assert!((result.best_distance - 4.0).abs() < 1e-10);
/// ```
pub fn search(locations: &[Location], initial_route: &[usize], config: &TabuConfig) -> TabuResult {
    let mut current = initial_route.to_vec();
    let mut best = current.clone();
    let mut best_distance = route_length(locations, &current);
    let mut best_iteration = 0;
    let mut tabu = TabuList::new(config.tabu_size);
    let mut iterations = 0;

    let customers = interior_customers(&current);
    if customers.len() < 2 {
        return TabuResult {
            best,
            best_distance,
            iterations,
            best_iteration,
            tabu,
        };
    }

    for iteration in 1..=config.iterations {
        let Some((neighbor, neighbor_distance, pair)) =
            best_admissible_neighbor(locations, &current, &customers, &tabu)
        else {
            break;
        };

        current = neighbor;
        iterations += 1;

        if neighbor_distance < best_distance {
            best = current.clone();
            best_distance = neighbor_distance;
            best_iteration = iteration;
        }

        tabu.push(pair.0, pair.1);
    }

    trace!("tabu: {iterations} moves, best {best_distance:.4} at iteration {best_iteration}");

    TabuResult {
        best,
        best_distance,
        iterations,
        best_iteration,
        tabu,
    }
}

/// Scans all non-tabu customer pairs and returns the shortest neighbor.
fn best_admissible_neighbor(
    locations: &[Location],
    current: &[usize],
    customers: &[usize],
    tabu: &TabuList,
) -> Option<(Vec<usize>, f64, (usize, usize))> {
    let mut best: Option<(Vec<usize>, f64, (usize, usize))> = None;

    for (i, &a) in customers.iter().enumerate() {
        for &b in &customers[i + 1..] {
            if tabu.contains(a, b) {
                continue;
            }
            let mut neighbor = current.to_vec();
            if !swap_customers(&mut neighbor, a, b) {
                continue;
            }
            let distance = route_length(locations, &neighbor);
            if best.as_ref().is_none_or(|(_, d, _)| distance < *d) {
                best = Some((neighbor, distance, canonical_pair(a, b)));
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Location> {
        vec![
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(1.0, 1.0),
            Location::new(0.0, 1.0),
        ]
    }

    fn scattered(n: usize) -> Vec<Location> {
        (0..n)
            .map(|i| Location::new((i * 37 % 11) as f64, (i * 17 % 13) as f64))
            .collect()
    }

    #[test]
    fn test_tabu_fixes_crossing() {
        let locs = square();
        let result = search(&locs, &[0, 2, 1, 3, 0], &TabuConfig::default());
        assert!((result.best_distance - 4.0).abs() < 1e-10);
        assert_eq!(result.best_iteration, 1);
    }

    #[test]
    fn test_tabu_never_worse_than_initial() {
        let locs = scattered(10);
        let initial: Vec<usize> = std::iter::once(0).chain(1..10).chain(std::iter::once(0)).collect();
        let result = search(&locs, &initial, &TabuConfig::default().with_iterations(50));
        assert!(result.best_distance <= route_length(&locs, &initial));
        assert_eq!(result.best.len(), initial.len());
        let mut a = result.best.clone();
        let mut b = initial.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tabu_moves_to_worse_neighbor() {
        // Starting at the optimum, no neighbor is shorter; the search must
        // still move, so the executed pairs fill the tabu list.
        let locs = square();
        let result = search(&locs, &[0, 1, 2, 3, 0], &TabuConfig::default().with_iterations(2));
        assert_eq!(result.iterations, 2);
        assert_eq!(result.tabu.len(), 2);
        assert_eq!(result.best, vec![0, 1, 2, 3, 0]);
        assert_eq!(result.best_iteration, 0);
    }

    #[test]
    fn test_tabu_stops_when_all_moves_tabu() {
        // Three customers give three pairs; with room for all of them the
        // fourth iteration finds no admissible neighbor.
        let locs = square();
        let result = search(&locs, &[0, 1, 2, 3, 0], &TabuConfig::default().with_iterations(100));
        assert_eq!(result.iterations, 3);
        assert_eq!(result.tabu.len(), 3);
    }

    #[test]
    fn test_tabu_fifo_bound() {
        let locs = scattered(8);
        let initial = vec![0, 1, 2, 3, 4, 5, 6, 7, 0];
        let config = TabuConfig::default().with_tabu_size(4).with_iterations(30);
        let result = search(&locs, &initial, &config);
        assert_eq!(result.iterations, 30);
        assert_eq!(result.tabu.len(), 4);
    }

    #[test]
    fn test_tabu_equal_neighbor_does_not_replace_best() {
        // On a line both orders of two customers have the same length; the
        // only move is executed but the best keeps the initial route.
        let locs = vec![
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(2.0, 0.0),
        ];
        let result = search(&locs, &[0, 2, 1, 0], &TabuConfig::default().with_iterations(1));
        assert_eq!(result.iterations, 1);
        assert_eq!(result.best, vec![0, 2, 1, 0]);
        assert!((result.best_distance - 4.0).abs() < 1e-10);
        assert!(result.tabu.contains(1, 2));
    }

    #[test]
    fn test_tabu_degenerate_routes() {
        let locs = square();
        let one = search(&locs, &[0, 3, 0], &TabuConfig::default());
        assert_eq!(one.best, vec![0, 3, 0]);
        assert!((one.best_distance - 2.0).abs() < 1e-10);
        assert_eq!(one.iterations, 0);

        let none = search(&locs, &[0, 0], &TabuConfig::default());
        assert_eq!(none.best_distance, 0.0);
    }

    #[test]
    fn test_tabu_identical_points() {
        let locs = vec![Location::new(1.0, 1.0); 4];
        let result = search(&locs, &[0, 1, 2, 3, 0], &TabuConfig::default());
        assert_eq!(result.best_distance, 0.0);
    }
}

//! SA execution loop.

use log::trace;
use rand::Rng;

use super::config::SaConfig;
use crate::distance::route_length;
use crate::models::Location;
use crate::swap::{interior_customers, swap_customers};

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best route found, depot anchors unchanged.
    pub best: Vec<usize>,

    /// Length of the best route.
    pub best_distance: f64,

    /// Iterations executed.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,
}

/// Runs simulated annealing from `initial_route`.
///
/// The first and last entries of the route are depot anchors. Each iteration
/// draws two distinct customers, finds where each currently sits, and swaps
/// them. A shorter route is always accepted; a longer one with probability
/// `exp((current - new) / T)`. Routes with fewer than two customers are
/// returned unchanged.
///
/// All random draws come from `rng`, so a seeded generator reproduces a run.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::models::Location;
/// use u_vrp_meta::sa::{anneal, SaConfig};
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 0.0),
///     Location::new(1.0, 1.0),
///     Location::new(0.0, 1.0),
/// ];
/// let mut rng = u_numflow::random::create_rng(42);
/// let result = anneal(&locations, &[0, 2, 1, 3, 0], &SaConfig::default(), &mut rng);
/// assert!((result.best_distance - 4.0).abs() < 1e-10);
/// assert_eq!(result.best.first(), Some(&0));
/// assert_eq!(result.best.last(), Some(&0));
/// ```
pub fn anneal<R: Rng>(
    locations: &[Location],
    initial_route: &[usize],
    config: &SaConfig,
    rng: &mut R,
) -> SaResult {
    let mut current = initial_route.to_vec();
    let mut current_distance = route_length(locations, &current);
    let mut best = current.clone();
    let mut best_distance = current_distance;

    let mut temperature = config.temperature;
    let mut iterations = 0usize;
    let mut accepted_moves = 0usize;

    // Swaps never change which customers are present.
    let customers = interior_customers(&current);
    if customers.len() < 2 {
        return SaResult {
            best,
            best_distance,
            iterations,
            accepted_moves,
            final_temperature: temperature,
        };
    }

    for _ in 0..config.iterations {
        let (a, b) = pick_two(&customers, rng);

        let mut candidate = current.clone();
        if !swap_customers(&mut candidate, a, b) {
            break;
        }
        let candidate_distance = route_length(locations, &candidate);

        // Metropolis acceptance criterion
        let accept = candidate_distance < current_distance || {
            let probability = ((current_distance - candidate_distance) / temperature).exp();
            rng.random_range(0.0..1.0) < probability
        };

        if candidate_distance < best_distance {
            best = candidate.clone();
            best_distance = candidate_distance;
        }

        if accept {
            current = candidate;
            current_distance = candidate_distance;
            accepted_moves += 1;
        }

        iterations += 1;
        temperature *= config.cooling_rate;
    }

    trace!(
        "sa: {iterations} iterations, {accepted_moves} accepted, best {best_distance:.4}, T={temperature:.4}"
    );

    SaResult {
        best,
        best_distance,
        iterations,
        accepted_moves,
        final_temperature: temperature,
    }
}

/// Draws two distinct entries of `customers` (which has at least two).
fn pick_two<R: Rng>(customers: &[usize], rng: &mut R) -> (usize, usize) {
    let n = customers.len();
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (customers[i], customers[j])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use u_numflow::random::create_rng;

    /// Always yields the lowest value of any sampled range.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn square() -> Vec<Location> {
        vec![
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(1.0, 1.0),
            Location::new(0.0, 1.0),
        ]
    }

    fn sorted(route: &[usize]) -> Vec<usize> {
        let mut v = route.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_sa_fixes_crossing() {
        let locs = square();
        let mut rng = create_rng(7);
        let result = anneal(&locs, &[0, 2, 1, 3, 0], &SaConfig::default(), &mut rng);
        assert!((result.best_distance - 4.0).abs() < 1e-10);
        assert_eq!(result.iterations, 1000);
    }

    #[test]
    fn test_sa_preserves_anchors_and_multiset() {
        let locs: Vec<Location> = (0..9)
            .map(|i| Location::new((i * 7 % 5) as f64, (i * 3 % 4) as f64))
            .collect();
        let initial = vec![4, 1, 2, 3, 0, 5, 6, 7, 8, 4];
        let mut rng = create_rng(42);
        let result = anneal(&locs, &initial, &SaConfig::default(), &mut rng);
        assert_eq!(result.best.len(), initial.len());
        assert_eq!(result.best.first(), initial.first());
        assert_eq!(result.best.last(), initial.last());
        assert_eq!(sorted(&result.best), sorted(&initial));
        assert!(result.best_distance <= route_length(&locs, &initial) + 1e-10);
    }

    #[test]
    fn test_sa_degenerate_routes_returned_unchanged() {
        let locs = square();
        let mut rng = create_rng(1);
        let config = SaConfig::default();

        let one = anneal(&locs, &[0, 2, 0], &config, &mut rng);
        assert_eq!(one.best, vec![0, 2, 0]);
        assert!((one.best_distance - 2.0 * 2f64.sqrt()).abs() < 1e-10);
        assert_eq!(one.iterations, 0);

        let none = anneal(&locs, &[0, 0], &config, &mut rng);
        assert_eq!(none.best, vec![0, 0]);
        assert_eq!(none.best_distance, 0.0);
    }

    #[test]
    fn test_sa_identical_points_zero_distance() {
        let locs = vec![Location::new(2.0, 2.0); 5];
        let mut rng = create_rng(3);
        let result = anneal(&locs, &[0, 1, 2, 3, 4, 0], &SaConfig::default(), &mut rng);
        assert_eq!(result.best_distance, 0.0);
    }

    #[test]
    fn test_sa_geometric_cooling() {
        let locs = square();
        let mut rng = create_rng(9);
        let config = SaConfig::default()
            .with_temperature(100.0)
            .with_cooling_rate(0.5)
            .with_iterations(3);
        let result = anneal(&locs, &[0, 1, 2, 3, 0], &config, &mut rng);
        assert_eq!(result.iterations, 3);
        assert!((result.final_temperature - 12.5).abs() < 1e-10);
    }

    #[test]
    fn test_sa_zero_iterations() {
        let locs = square();
        let mut rng = create_rng(9);
        let config = SaConfig::default().with_iterations(0);
        let result = anneal(&locs, &[0, 2, 1, 3, 0], &config, &mut rng);
        assert_eq!(result.best, vec![0, 2, 1, 3, 0]);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_sa_deterministic_draws_swap_chosen_customers() {
        // The first two customers in route order are swapped, and the uniform
        // draw of 0.0 accepts any Metropolis probability above zero.
        let locs = square();
        let mut rng = ZeroRng;
        let config = SaConfig::default().with_iterations(1);
        let result = anneal(&locs, &[0, 1, 2, 3, 0], &config, &mut rng);
        assert_eq!(result.accepted_moves, 1);
        assert_eq!(result.best, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_sa_same_seed_same_result() {
        let locs: Vec<Location> = (0..8)
            .map(|i| Location::new((i * 13 % 7) as f64, (i * 5 % 6) as f64))
            .collect();
        let initial = vec![0, 1, 2, 3, 4, 5, 6, 7, 0];
        let config = SaConfig::default();
        let a = anneal(&locs, &initial, &config, &mut create_rng(11));
        let b = anneal(&locs, &initial, &config, &mut create_rng(11));
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_distance, b.best_distance);
    }
}

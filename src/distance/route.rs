//! Point distance and route length.

use crate::models::Location;

/// Straight-line distance between two locations.
pub fn euclidean(a: &Location, b: &Location) -> f64 {
    a.distance_to(b)
}

/// Sums the Euclidean distance over consecutive pairs of a route.
///
/// Routes of length 0 or 1 have length 0.
///
/// # Panics
///
/// Panics if a route index is out of bounds for `locations`.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::models::Location;
/// use u_vrp_meta::distance::route_length;
///
/// let locs = vec![Location::new(0.0, 0.0), Location::new(3.0, 4.0)];
/// assert!((route_length(&locs, &[0, 1, 0]) - 10.0).abs() < 1e-10);
/// assert_eq!(route_length(&locs, &[1]), 0.0);
/// assert_eq!(route_length(&locs, &[]), 0.0);
/// ```
pub fn route_length(locations: &[Location], route: &[usize]) -> f64 {
    route
        .windows(2)
        .map(|w| euclidean(&locations[w[0]], &locations[w[1]]))
        .sum()
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

    #[test]
    fn test_euclidean() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(3.0, 4.0);
        assert!((euclidean(&a, &b) - 5.0).abs() < 1e-10);
        assert_eq!(euclidean(&a, &a), 0.0);
    }

    #[test]
    fn test_route_length_closed_square() {
        let locs = square();
        assert!((route_length(&locs, &[0, 1, 2, 3, 0]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_length_crossing() {
        let locs = square();
        let expected = 2.0 + 2.0 * 2f64.sqrt();
        assert!((route_length(&locs, &[0, 2, 1, 3, 0]) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_route_length_reversal() {
        let locs = square();
        let route = [0, 2, 3, 1, 0];
        let reversed: Vec<usize> = route.iter().rev().copied().collect();
        assert!((route_length(&locs, &route) - route_length(&locs, &reversed)).abs() < 1e-10);
    }

    #[test]
    fn test_route_length_degenerate() {
        let locs = square();
        assert_eq!(route_length(&locs, &[]), 0.0);
        assert_eq!(route_length(&locs, &[2]), 0.0);
    }
}

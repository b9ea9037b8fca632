//! Customer swap neighborhood shared by annealing and tabu search.
//!
//! Both searches pick customers by location index and look up where each one
//! currently sits, rather than picking positions directly. The first and last
//! entries of a route are depot anchors and never move.

/// Distinct customer indices in the interior of a closed route, in route order.
///
/// Values equal to either anchor are excluded.
pub(crate) fn interior_customers(route: &[usize]) -> Vec<usize> {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return Vec::new();
    };
    let mut customers: Vec<usize> = Vec::with_capacity(route.len().saturating_sub(2));
    for &loc in interior(route) {
        if loc != first && loc != last && !customers.contains(&loc) {
            customers.push(loc);
        }
    }
    customers
}

/// Current position of customer `loc` in `route`, anchors excluded.
pub(crate) fn position_of(route: &[usize], loc: usize) -> Option<usize> {
    interior(route)
        .iter()
        .position(|&l| l == loc)
        .map(|p| p + 1)
}

/// Swaps the positions currently holding customers `a` and `b`.
///
/// Returns `false` and leaves the route untouched if either is absent.
pub(crate) fn swap_customers(route: &mut [usize], a: usize, b: usize) -> bool {
    match (position_of(route, a), position_of(route, b)) {
        (Some(pa), Some(pb)) => {
            route.swap(pa, pb);
            true
        }
        _ => false,
    }
}

/// Canonical (sorted) form of an unordered customer pair.
pub(crate) fn canonical_pair(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn interior(route: &[usize]) -> &[usize] {
    if route.len() < 2 {
        &[]
    } else {
        &route[1..route.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_customers() {
        assert_eq!(interior_customers(&[0, 3, 1, 2, 0]), vec![3, 1, 2]);
        assert!(interior_customers(&[0, 0]).is_empty());
        assert!(interior_customers(&[]).is_empty());
        assert!(interior_customers(&[4]).is_empty());
    }

    #[test]
    fn test_interior_excludes_anchor_values() {
        assert_eq!(interior_customers(&[2, 0, 2, 5, 2]), vec![0, 5]);
    }

    #[test]
    fn test_position_by_value() {
        let route = [0, 7, 3, 9, 0];
        assert_eq!(position_of(&route, 3), Some(2));
        assert_eq!(position_of(&route, 9), Some(3));
        assert_eq!(position_of(&route, 4), None);
    }

    #[test]
    fn test_swap_customers_non_contiguous_indices() {
        let mut route = vec![0, 7, 3, 9, 0];
        assert!(swap_customers(&mut route, 9, 7));
        assert_eq!(route, vec![0, 9, 3, 7, 0]);
    }

    #[test]
    fn test_swap_missing_customer() {
        let mut route = vec![0, 1, 2, 0];
        assert!(!swap_customers(&mut route, 1, 5));
        assert_eq!(route, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_canonical_pair() {
        assert_eq!(canonical_pair(5, 2), (2, 5));
        assert_eq!(canonical_pair(2, 5), (2, 5));
    }
}

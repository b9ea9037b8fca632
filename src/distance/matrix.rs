//! Dense distance matrix.

use crate::models::Location;

use super::euclidean;

/// A dense n×n distance matrix stored in row-major order.
///
/// Entries are the same Euclidean values [`euclidean`] returns, so
/// [`DistanceMatrix::tour_length`] agrees exactly with
/// [`route_length`](super::route_length).
///
/// # Examples
///
/// ```
/// use u_vrp_meta::models::Location;
/// use u_vrp_meta::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(3.0, 4.0),
///     Location::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix of the given locations.
    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = euclidean(&locations[i], &locations[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sums edge distances over consecutive pairs of `route`.
    pub fn tour_length(&self, route: &[usize]) -> f64 {
        route.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

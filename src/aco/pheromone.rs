//! Call-local pheromone table.

/// One pheromone value per ordered pair of locations, stored row-major.
///
/// Every value starts at 1. A table belongs to a single colony run and is
/// never shared between runs.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::aco::PheromoneTable;
///
/// let mut table = PheromoneTable::new(3);
/// table.evaporate(0.5);
/// table.deposit(&[0, 2, 0], 0.25);
/// assert_eq!(table.get(0, 2), 0.75);
/// assert_eq!(table.get(2, 0), 0.75);
/// assert_eq!(table.get(0, 1), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneTable {
    values: Vec<f64>,
    size: usize,
}

impl PheromoneTable {
    /// Creates an n×n table with every entry set to 1.
    pub fn new(size: usize) -> Self {
        Self {
            values: vec![1.0; size * size],
            size,
        }
    }

    /// Pheromone on the edge `from -> to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    /// Number of locations covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - decay`.
    pub fn evaporate(&mut self, decay: f64) {
        let keep = 1.0 - decay;
        for v in &mut self.values {
            *v *= keep;
        }
    }

    /// Adds `amount` to every directed edge of `tour`.
    pub fn deposit(&mut self, tour: &[usize], amount: f64) {
        for w in tour.windows(2) {
            self.values[w[0] * self.size + w[1]] += amount;
        }
    }
}

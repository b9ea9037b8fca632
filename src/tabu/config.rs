//! Tabu Search configuration.

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_iterations(1000)
///     .with_tabu_size(7);
/// assert_eq!(config.iterations, 1000);
/// assert_eq!(config.tabu_size, 7);
/// ```
#[derive(Debug, Clone)]
pub struct TabuConfig {
    /// Maximum number of recently executed swaps kept tabu.
    pub tabu_size: usize,
    /// Maximum number of iterations.
    pub iterations: usize,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_size: 10,
            iterations: 500,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }
}

//! ACO configuration.

/// Configuration for the ant colony.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_beta(2.5);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.num_iterations, 100);
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Ants constructing a tour per iteration.
    pub num_ants: usize,

    /// Number of construct/evaporate/deposit rounds.
    pub num_iterations: usize,

    /// Evaporation rate in [0, 1]. Pheromone is multiplied by `1 - decay`.
    pub decay: f64,

    /// Pheromone exponent.
    pub alpha: f64,

    /// Inverse-distance exponent.
    pub beta: f64,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            num_iterations: 100,
            decay: 0.1,
            alpha: 1.0,
            beta: 2.0,
        }
    }
}

impl AcoConfig {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_ants == 0 {
            return Err("num_ants must be at least 1".into());
        }
        if self.num_iterations == 0 {
            return Err("num_iterations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(format!("decay must be in [0, 1], got {}", self.decay));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err("alpha and beta must be finite".into());
        }
        Ok(())
    }
}

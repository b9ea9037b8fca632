//! SA configuration.

/// Configuration for simulated annealing.
///
/// Defaults are the per-vehicle settings the fleet driver uses.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_temperature(500.0)
///     .with_cooling_rate(0.95)
///     .with_iterations(200);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.iterations, 200);
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more worsening moves.
    pub temperature: f64,

    /// Geometric cooling factor applied after every iteration.
    pub cooling_rate: f64,

    /// Fixed iteration budget.
    pub iterations: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            temperature: 10_000.0,
            cooling_rate: 0.99,
            iterations: 1000,
        }
    }
}

impl SaConfig {
    pub fn with_temperature(mut self, t: f64) -> Self {
        self.temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(format!(
                "temperature must be positive and finite, got {}",
                self.temperature
            ));
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate > 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}

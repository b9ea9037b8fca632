//! Driver configuration.

use crate::aco::AcoConfig;
use crate::error::{Result, VrpError};
use crate::sa::SaConfig;
use crate::tabu::TabuConfig;

/// Which customers the ant colony plans over for each vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AcoScope {
    /// Every non-depot location, regardless of the vehicle's assignment.
    ///
    /// The colony's tour then covers customers assigned to other vehicles,
    /// so its length is not directly comparable to the SA and tabu routes,
    /// yet it still competes with them.
    #[default]
    AllLocations,
    /// Only the customers assigned to the vehicle being routed.
    AssignedCustomers,
}

/// Configuration for the fleet driver.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::solver::{AcoScope, SolverConfig};
/// use u_vrp_meta::tabu::TabuConfig;
///
/// let config = SolverConfig::default()
///     .with_tabu(TabuConfig::default().with_iterations(100))
///     .with_aco_scope(AcoScope::AssignedCustomers)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Simulated annealing settings.
    pub sa: SaConfig,
    /// Tabu search settings.
    pub tabu: TabuConfig,
    /// Ant colony settings.
    pub aco: AcoConfig,
    /// Customer set the colony plans over.
    pub aco_scope: AcoScope,
    /// Base random seed (`None` draws one per solve).
    pub seed: Option<u64>,
}

impl SolverConfig {
    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_tabu(mut self, tabu: TabuConfig) -> Self {
        self.tabu = tabu;
        self
    }

    pub fn with_aco(mut self, aco: AcoConfig) -> Self {
        self.aco = aco;
        self
    }

    pub fn with_aco_scope(mut self, scope: AcoScope) -> Self {
        self.aco_scope = scope;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every optimizer configuration.
    pub fn validate(&self) -> Result<()> {
        self.sa
            .validate()
            .map_err(|e| VrpError::invalid_config(format!("sa: {e}")))?;
        self.aco
            .validate()
            .map_err(|e| VrpError::invalid_config(format!("aco: {e}")))?;
        Ok(())
    }
}

//! Local search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for [`LocalSearchSolver`](super::LocalSearchSolver).
///
/// # Examples
///
/// ```
/// use u_facility::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(500)
///     .with_max_resets(5)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.max_stagnation, 10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalSearchConfig {
    /// Maximum number of sweeps over the neighborhood.
    pub max_iterations: usize,
    /// Consecutive sweeps without an accepted move before a restart.
    pub max_stagnation: usize,
    /// The search stops once this many restarts have happened.
    pub max_resets: usize,
    /// Random seed (None for a fresh one).
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            max_stagnation: 10,
            max_resets: 3,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the maximum number of sweeps.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stagnation threshold that triggers a restart.
    pub fn with_max_stagnation(mut self, n: usize) -> Self {
        self.max_stagnation = n;
        self
    }

    /// Sets the restart budget.
    pub fn with_max_resets(mut self, n: usize) -> Self {
        self.max_resets = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

//! Tabu Search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for [`TabuSearchSolver`](super::TabuSearchSolver).
///
/// # Examples
///
/// ```
/// use u_facility::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tenure(7)
///     .with_aspiration(true);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tenure, 7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Maximum number of moves held in the tabu list.
    pub tenure: usize,
    /// Whether a tabu move that would produce a new global best is still
    /// admissible (aspiration criterion).
    pub aspiration: bool,
    /// Consecutive iterations without improvement before stopping.
    pub stagnation_limit: usize,
    /// Random seed (None for a fresh one).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tenure: 10,
            aspiration: true,
            stagnation_limit: 10,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (capacity of the tabu list).
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = tenure;
        self
    }

    /// Enables or disables aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the number of non-improving iterations tolerated.
    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

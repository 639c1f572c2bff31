//! Filter-and-fan configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for [`FilterAndFanSolver`](super::FilterAndFanSolver).
///
/// # Examples
///
/// ```
/// use u_facility::filter_fan::FilterAndFanConfig;
///
/// let config = FilterAndFanConfig::default()
///     .with_fan_rounds(5)
///     .with_perturbation_probability(0.2);
/// assert_eq!(config.fan_rounds, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterAndFanConfig {
    /// Sweep cap for each local search descent.
    pub max_inner_iterations: usize,
    /// Number of perturb-and-reoptimize rounds after the first descent.
    pub fan_rounds: usize,
    /// Probability that a customer is reassigned during a perturbation.
    pub perturbation_probability: f64,
    /// Random seed (None for a fresh one).
    pub seed: Option<u64>,
}

impl Default for FilterAndFanConfig {
    fn default() -> Self {
        Self {
            max_inner_iterations: 100,
            fan_rounds: 3,
            perturbation_probability: 0.1,
            seed: Some(42),
        }
    }
}

impl FilterAndFanConfig {
    /// Sets the sweep cap for each descent.
    pub fn with_max_inner_iterations(mut self, n: usize) -> Self {
        self.max_inner_iterations = n;
        self
    }

    /// Sets the number of fan rounds.
    pub fn with_fan_rounds(mut self, n: usize) -> Self {
        self.fan_rounds = n;
        self
    }

    /// Sets the per-customer perturbation probability.
    pub fn with_perturbation_probability(mut self, p: f64) -> Self {
        self.perturbation_probability = p;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let p = self.perturbation_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(format!("perturbation_probability must be in [0, 1], got {p}"));
        }
        Ok(())
    }
}

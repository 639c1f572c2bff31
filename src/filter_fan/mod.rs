//! Filter-and-fan diversification.
//!
//! Descends to a local optimum with first-improvement local search (the
//! "filter"), then repeatedly perturbs a random fraction of the customers
//! and descends again (the "fan"). No restarts or tabu memory are involved;
//! the perturbations alone move the search out of the current basin.

mod config;
mod runner;

pub use config::FilterAndFanConfig;
pub use runner::{FilterAndFanResult, FilterAndFanSolver};

//! First-improvement local search with restarts.
//!
//! Sweeps every single-customer reassignment, accepting the first move
//! that lowers the cost. Move costs come from
//! [`CostModel::incremental_cost`](crate::model::CostModel::incremental_cost),
//! so a sweep costs O(n·m). When repeated sweeps stop improving, the
//! search restarts from a fresh random assignment while keeping the best
//! solution seen so far.

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub(crate) use runner::first_improvement_sweep;
pub use runner::{LocalSearchResult, LocalSearchSolver};

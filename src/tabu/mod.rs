//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses a short-term
//! memory (the tabu list) to forbid recently applied moves. Each
//! iteration evaluates every single-customer reassignment by full cost
//! recomputation and applies the best admissible one.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuSearchSolver};
pub use types::{Move, TabuList};

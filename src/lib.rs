//! Uncapacitated facility location (UFLP) solvers.
//!
//! Assigns customers to warehouses so that allocation costs plus the fixed
//! costs of every used warehouse are minimal. Three metaheuristics share a
//! single cost model:
//!
//! - **Local search**: first-improvement reassignment sweeps with
//!   incremental cost updates and stagnation-triggered restarts.
//! - **Tabu Search (TS)**: best-improvement sweeps with a bounded FIFO tabu
//!   list and an aspiration criterion.
//! - **Filter-and-fan**: local search descents separated by random
//!   perturbations of a fraction of the customers.
//!
//! # Architecture
//!
//! [`model::ProblemInstance`] is immutable and borrowed by every solver.
//! Each solver owns its working assignment and seeded generator, so independent solvers never share mutable state.
//! Capacities are carried in the data model but never constrain an
//! assignment.

pub mod filter_fan;
pub mod local_search;
pub mod model;
pub mod random;
pub mod tabu;

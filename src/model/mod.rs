//! UFLP domain model.
//!
//! - [`ProblemInstance`] — immutable warehouse/customer data
//! - [`WarehouseUsage`] — demand assigned to each warehouse
//! - [`CostModel`] — full and incremental cost evaluation
//! - [`OrLibLoader`] — parser for OR-Library instance files

mod cost;
mod instance;
mod loader;
mod usage;

#[cfg(test)]
pub(crate) mod testing;

pub use cost::CostModel;
pub use instance::{Assignment, InstanceError, ProblemInstance};
pub use loader::{LoadError, OrLibLoader, ParseTokenError};
pub use usage::WarehouseUsage;

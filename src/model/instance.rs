//! Facility location problem data.

use rand::Rng;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Customer-to-warehouse assignment: entry `j` is the warehouse serving
/// customer `j`.
pub type Assignment = Vec<usize>;

/// Shape errors detected when building a [`ProblemInstance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// The instance has no warehouse to assign customers to.
    NoWarehouses,
    /// A per-warehouse or per-customer vector has the wrong length.
    LengthMismatch {
        /// Name of the offending field.
        field: &'static str,
        /// Length implied by the instance dimensions.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWarehouses => write!(f, "instance must contain at least one warehouse"),
            Self::LengthMismatch {
                field,
                expected,
                actual,
            } => write!(f, "{field} has length {actual}, expected {expected}"),
        }
    }
}

impl std::error::Error for InstanceError {}

/// Immutable UFLP instance shared read-only by every solver.
///
/// Allocation costs are stored densely in warehouse-major order, so
/// `allocation_cost(w, j)` is the cost of serving customer `j` from
/// warehouse `w`.
///
/// Capacities are carried for completeness but never constrain an
/// assignment.
///
/// # Examples
///
/// ```
/// use u_facility::model::ProblemInstance;
///
/// let instance = ProblemInstance::new(
///     vec![100.0, 100.0],
///     vec![10.0, 20.0],
///     vec![5, 7, 3],
///     vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
/// )
/// .unwrap();
/// assert_eq!(instance.num_warehouses(), 2);
/// assert_eq!(instance.num_customers(), 3);
/// assert_eq!(instance.allocation_cost(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProblemInstance {
    num_warehouses: usize,
    num_customers: usize,
    capacities: Vec<f64>,
    fixed_costs: Vec<f64>,
    demands: Vec<u64>,
    allocation_costs: Vec<f64>,
}

impl ProblemInstance {
    /// Builds an instance from per-warehouse data, per-customer demands and
    /// an allocation cost table indexed `[warehouse][customer]`.
    ///
    /// Only the shape is checked. Costs are taken as given.
    pub fn new(
        capacities: Vec<f64>,
        fixed_costs: Vec<f64>,
        demands: Vec<u64>,
        allocation_costs: Vec<Vec<f64>>,
    ) -> Result<Self, InstanceError> {
        let num_warehouses = fixed_costs.len();
        let num_customers = demands.len();

        if num_warehouses == 0 {
            return Err(InstanceError::NoWarehouses);
        }
        check_len("capacities", num_warehouses, capacities.len())?;
        check_len("allocation_costs", num_warehouses, allocation_costs.len())?;
        for row in &allocation_costs {
            check_len("allocation_costs row", num_customers, row.len())?;
        }

        Ok(Self {
            num_warehouses,
            num_customers,
            capacities,
            fixed_costs,
            demands,
            allocation_costs: allocation_costs.into_iter().flatten().collect(),
        })
    }

    /// Number of candidate warehouses.
    pub fn num_warehouses(&self) -> usize {
        self.num_warehouses
    }

    /// Number of customers.
    pub fn num_customers(&self) -> usize {
        self.num_customers
    }

    /// Warehouse capacities (informational only).
    pub fn capacities(&self) -> &[f64] {
        &self.capacities
    }

    /// Fixed opening costs, one per warehouse.
    pub fn fixed_costs(&self) -> &[f64] {
        &self.fixed_costs
    }

    /// Fixed opening cost of warehouse `w`.
    pub fn fixed_cost(&self, w: usize) -> f64 {
        self.fixed_costs[w]
    }

    /// Customer demands.
    pub fn demands(&self) -> &[u64] {
        &self.demands
    }

    /// Demand of customer `j`.
    pub fn demand(&self, j: usize) -> u64 {
        self.demands[j]
    }

    /// Cost of serving customer `j` from warehouse `w`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn allocation_cost(&self, w: usize, j: usize) -> f64 {
        self.allocation_costs[w * self.num_customers + j]
    }

    /// Draws an assignment sending each customer to a uniformly random
    /// warehouse.
    pub fn random_assignment<R: Rng>(&self, rng: &mut R) -> Assignment {
        (0..self.num_customers)
            .map(|_| rng.random_range(0..self.num_warehouses))
            .collect()
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), InstanceError> {
    if expected == actual {
        Ok(())
    } else {
        Err(InstanceError::LengthMismatch {
            field,
            expected,
            actual,
        })
    }
}

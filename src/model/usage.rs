//! Per-warehouse demand bookkeeping.

use super::ProblemInstance;

/// Total demand currently assigned to each warehouse.
///
/// Invariant: `usage[w]` equals the sum of the demands of all customers
/// assigned to `w`. A warehouse is open iff its usage is positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseUsage {
    usage: Vec<u64>,
}

impl WarehouseUsage {
    /// Creates an all-zero table for `num_warehouses` warehouses.
    pub fn new(num_warehouses: usize) -> Self {
        Self {
            usage: vec![0; num_warehouses],
        }
    }

    /// Builds the table from scratch for the given assignment.
    pub fn from_assignment(instance: &ProblemInstance, assignment: &[usize]) -> Self {
        let mut usage = Self::new(instance.num_warehouses());
        usage.recompute(instance, assignment);
        usage
    }

    /// Resets the table to zero and re-accumulates every customer's demand.
    pub fn recompute(&mut self, instance: &ProblemInstance, assignment: &[usize]) {
        self.usage.iter_mut().for_each(|u| *u = 0);
        for (j, &w) in assignment.iter().enumerate() {
            self.usage[w] += instance.demand(j);
        }
    }

    /// Demand currently assigned to warehouse `w`.
    pub fn get(&self, w: usize) -> u64 {
        self.usage[w]
    }

    /// Returns `true` if warehouse `w` serves positive demand.
    pub fn is_open(&self, w: usize) -> bool {
        self.usage[w] > 0
    }

    /// Moves `demand` units from warehouse `from` to warehouse `to`.
    ///
    /// Must be applied together with the matching assignment update.
    pub fn transfer(&mut self, demand: u64, from: usize, to: usize) {
        debug_assert!(self.usage[from] >= demand, "usage underflow at warehouse {from}");
        self.usage[from] -= demand;
        self.usage[to] += demand;
    }

    /// Indices of warehouses with positive usage, ascending.
    pub fn open_warehouses(&self) -> Vec<usize> {
        self.usage
            .iter()
            .enumerate()
            .filter(|&(_, &u)| u > 0)
            .map(|(w, _)| w)
            .collect()
    }

    /// Raw usage values.
    pub fn as_slice(&self) -> &[u64] {
        &self.usage
    }
}

//! Full and incremental solution cost.
//!
//! The cost of an assignment is the sum of its allocation costs plus the
//! fixed cost of every warehouse whose usage is strictly positive.

use super::{ProblemInstance, WarehouseUsage};

/// Cost evaluator over a borrowed [`ProblemInstance`].
///
/// # Examples
///
/// ```
/// use u_facility::model::{CostModel, ProblemInstance, WarehouseUsage};
///
/// let instance = ProblemInstance::new(
///     vec![0.0, 0.0],
///     vec![10.0, 5.0],
///     vec![1, 1],
///     vec![vec![1.0, 2.0], vec![3.0, 4.0]],
/// )
/// .unwrap();
/// let model = CostModel::new(&instance);
///
/// let assignment = vec![0, 0];
/// assert_eq!(model.total_cost(&assignment), 13.0);
///
/// let usage = WarehouseUsage::from_assignment(&instance, &assignment);
/// let delta = model.incremental_cost(1, 0, 1, &usage);
/// assert_eq!(model.total_cost(&[0, 1]), 13.0 + delta);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    instance: &'a ProblemInstance,
}

impl<'a> CostModel<'a> {
    /// Creates an evaluator for `instance`.
    pub fn new(instance: &'a ProblemInstance) -> Self {
        Self { instance }
    }

    /// The instance this model evaluates against.
    pub fn instance(&self) -> &'a ProblemInstance {
        self.instance
    }

    /// Total cost of `assignment`, computed from scratch.
    ///
    /// # Panics
    ///
    /// Panics if the assignment references a warehouse outside the instance.
    pub fn total_cost(&self, assignment: &[usize]) -> f64 {
        let mut usage = WarehouseUsage::new(self.instance.num_warehouses());
        self.total_cost_with(assignment, &mut usage)
    }

    /// Total cost of `assignment`, accumulating usage into `scratch`.
    ///
    /// `scratch` is reset first and holds the usage of `assignment`
    /// afterwards. Lets hot loops avoid an allocation per evaluation.
    pub fn total_cost_with(&self, assignment: &[usize], scratch: &mut WarehouseUsage) -> f64 {
        let inst = self.instance;
        scratch.recompute(inst, assignment);

        let allocation: f64 = assignment
            .iter()
            .enumerate()
            .map(|(j, &w)| inst.allocation_cost(w, j))
            .sum();

        let fixed: f64 = (0..inst.num_warehouses())
            .filter(|&w| scratch.is_open(w))
            .map(|w| inst.fixed_cost(w))
            .sum();

        allocation + fixed
    }

    /// Cost delta of moving `customer` from warehouse `from` to `to`.
    ///
    /// Does not mutate `usage`; the caller applies
    /// [`WarehouseUsage::transfer`] when the move is accepted. Returns zero
    /// when `from == to`.
    ///
    /// A warehouse is charged its fixed cost only while its usage is
    /// positive, so a zero-demand customer never opens or closes one.
    ///
    /// The delta of a move and of its undo from the resulting state are exact
    /// negations of each other, so strict `< 0.0` acceptance cannot cycle.
    pub fn incremental_cost(
        &self,
        customer: usize,
        from: usize,
        to: usize,
        usage: &WarehouseUsage,
    ) -> f64 {
        if from == to {
            return 0.0;
        }

        let inst = self.instance;
        let demand = inst.demand(customer);
        let allocation = inst.allocation_cost(to, customer) - inst.allocation_cost(from, customer);

        if demand == 0 {
            return allocation;
        }

        // Leaving empties the old warehouse; arriving opens the new one.
        let closed = if usage.get(from) == demand {
            inst.fixed_cost(from)
        } else {
            0.0
        };
        let opened = if usage.get(to) == 0 {
            inst.fixed_cost(to)
        } else {
            0.0
        };

        allocation + (opened - closed)
    }

    /// Warehouses open under `assignment`, ascending.
    pub fn open_warehouses(&self, assignment: &[usize]) -> Vec<usize> {
        WarehouseUsage::from_assignment(self.instance, assignment).open_warehouses()
    }
}

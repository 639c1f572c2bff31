//! Filter-and-fan execution engine.
//!
//! # Algorithm
//!
//! 1. Draw a uniformly random assignment
//! 2. Run first-improvement local search until a sweep finds nothing or
//!    `max_inner_iterations` sweeps have run
//! 3. Repeat `fan_rounds` times: reassign each customer with probability
//!    `perturbation_probability` to a uniformly random warehouse, then run
//!    local search again
//! 4. Return the assignment left by the last round

use rand::rngs::StdRng;
use rand::Rng;

use super::config::FilterAndFanConfig;
use crate::local_search::first_improvement_sweep;
use crate::model::{Assignment, CostModel, ProblemInstance, WarehouseUsage};
use crate::random::rng_from_seed;

/// Result of a filter-and-fan run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterAndFanResult {
    /// Assignment after the last fan round.
    pub solution: Assignment,
    /// Cost of `solution`.
    pub cost: f64,
    /// Cheapest local optimum seen over all rounds.
    pub best: Assignment,
    /// Cost of `best`.
    pub best_cost: f64,
    /// Cost after the initial descent and after each fan round.
    pub phase_costs: Vec<f64>,
}

/// Filter-and-fan solver over a shared [`ProblemInstance`].
///
/// # Examples
///
/// ```
/// use u_facility::filter_fan::{FilterAndFanConfig, FilterAndFanSolver};
/// use u_facility::model::ProblemInstance;
///
/// let instance = ProblemInstance::new(
///     vec![0.0, 0.0],
///     vec![0.0, 0.0],
///     vec![1, 1],
///     vec![vec![1.0, 1.0], vec![3.0, 3.0]],
/// )
/// .unwrap();
///
/// let mut solver = FilterAndFanSolver::new(&instance, FilterAndFanConfig::default());
/// let solution = solver.filter_and_fan();
/// assert_eq!(solution, vec![0, 0]);
/// assert_eq!(solver.calculate_cost(&solution), 2.0);
/// ```
pub struct FilterAndFanSolver<'a> {
    model: CostModel<'a>,
    config: FilterAndFanConfig,
    rng: StdRng,
}

impl<'a> FilterAndFanSolver<'a> {
    /// Creates a solver with its own generator seeded from `config.seed`.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails [`FilterAndFanConfig::validate`].
    pub fn new(instance: &'a ProblemInstance, config: FilterAndFanConfig) -> Self {
        config.validate().expect("invalid FilterAndFanConfig");
        let rng = rng_from_seed(config.seed);
        Self {
            model: CostModel::new(instance),
            config,
            rng,
        }
    }

    /// Runs filter-and-fan and returns the final assignment.
    pub fn filter_and_fan(&mut self) -> Assignment {
        self.solve().solution
    }

    /// Runs filter-and-fan, reporting every phase.
    pub fn solve(&mut self) -> FilterAndFanResult {
        let initial = self.initial_solution();
        let mut solution = self.local_search(initial);
        let mut cost = self.calculate_cost(&solution);

        let mut best = solution.clone();
        let mut best_cost = cost;
        let mut phase_costs = Vec::with_capacity(self.config.fan_rounds + 1);
        phase_costs.push(cost);

        for round in 0..self.config.fan_rounds {
            let perturbed = self.perturb(solution);
            solution = self.local_search(perturbed);
            cost = self.calculate_cost(&solution);
            phase_costs.push(cost);
            log::debug!("fan round {}: cost {cost:.3}", round + 1);

            if cost < best_cost {
                best_cost = cost;
                best.clone_from(&solution);
            }
        }

        log::info!(
            "filter-and-fan finished: cost {cost:.3} (best {best_cost:.3}) after {} fan rounds",
            self.config.fan_rounds
        );

        FilterAndFanResult {
            solution,
            cost,
            best,
            best_cost,
            phase_costs,
        }
    }

    /// Draws a uniformly random assignment.
    pub fn initial_solution(&mut self) -> Assignment {
        self.model.instance().random_assignment(&mut self.rng)
    }

    /// Total cost of `solution`, computed from scratch.
    pub fn calculate_cost(&self, solution: &[usize]) -> f64 {
        self.model.total_cost(solution)
    }

    /// First-improvement descent without restarts.
    ///
    /// Stops after a sweep with no accepted move or after
    /// `max_inner_iterations` sweeps.
    pub fn local_search(&self, mut solution: Assignment) -> Assignment {
        let instance = self.model.instance();
        let mut usage = WarehouseUsage::from_assignment(instance, &solution);
        let mut cost = self.model.total_cost(&solution);

        let mut iteration = 0;
        let mut improved = true;
        while improved && iteration < self.config.max_inner_iterations {
            improved = first_improvement_sweep(&self.model, &mut solution, &mut usage, &mut cost);
            iteration += 1;
        }

        solution
    }

    /// Reassigns each customer independently, with probability
    /// `perturbation_probability`, to a uniformly random warehouse.
    pub fn perturb(&mut self, mut solution: Assignment) -> Assignment {
        let num_warehouses = self.model.instance().num_warehouses();
        let p = self.config.perturbation_probability;

        for w in solution.iter_mut() {
            if self.rng.random::<f64>() < p {
                *w = self.rng.random_range(0..num_warehouses);
            }
        }

        solution
    }
}

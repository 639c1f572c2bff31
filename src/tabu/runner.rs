//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Draw a uniformly random assignment
//! 2. At each iteration:
//!    a. Evaluate every move `(customer, current, other)` by full cost
//!    recomputation, scanning customers then warehouses in ascending order
//!    b. Skip tabu moves unless they beat the best cost (aspiration)
//!    c. Keep the cheapest move that improves on the best cost; ties go to
//!    the first one scanned
//!    d. Apply it and append it to the tabu list
//! 3. Terminate after max iterations or `stagnation_limit` iterations
//!    without improvement
//!
//! Aspiration compares against the best cost at evaluation time, not the
//! best cost when the move became tabu.

use rand::rngs::StdRng;

use super::config::TabuConfig;
use super::types::{Move, TabuList};
use crate::model::{Assignment, CostModel, ProblemInstance, WarehouseUsage};
use crate::random::rng_from_seed;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best assignment found.
    pub best: Assignment,
    /// Cost of the best assignment.
    pub best_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found.
    pub best_iteration: usize,
    /// Moves applied, in order.
    pub moves: Vec<Move>,
    /// Cost history (best cost at each iteration).
    pub cost_history: Vec<f64>,
}

/// Tabu Search solver over a shared [`ProblemInstance`].
///
/// # Examples
///
/// ```
/// use u_facility::model::ProblemInstance;
/// use u_facility::tabu::{TabuConfig, TabuSearchSolver};
///
/// let instance = ProblemInstance::new(
///     vec![0.0, 0.0],
///     vec![1.0, 1.0],
///     vec![2, 3],
///     vec![vec![4.0, 4.0], vec![9.0, 9.0]],
/// )
/// .unwrap();
///
/// let mut solver = TabuSearchSolver::new(&instance, TabuConfig::default().with_seed(42));
/// let result = solver.solve();
/// assert_eq!(result.best, vec![0, 0]);
/// assert_eq!(solver.best_cost(), 9.0);
/// ```
pub struct TabuSearchSolver<'a> {
    model: CostModel<'a>,
    config: TabuConfig,
    rng: StdRng,
    assignment: Assignment,
    scratch: WarehouseUsage,
    tabu_list: TabuList,
    best_assignment: Assignment,
    best_cost: f64,
}

impl<'a> TabuSearchSolver<'a> {
    /// Creates a solver with its own generator seeded from `config.seed`.
    pub fn new(instance: &'a ProblemInstance, config: TabuConfig) -> Self {
        let rng = rng_from_seed(config.seed);
        let m = instance.num_warehouses();
        Self {
            model: CostModel::new(instance),
            tabu_list: TabuList::new(config.tenure),
            config,
            rng,
            assignment: Vec::new(),
            scratch: WarehouseUsage::new(m),
            best_assignment: Vec::new(),
            best_cost: f64::INFINITY,
        }
    }

    /// Draws a random assignment and makes it the current and best solution.
    pub fn initialize(&mut self) {
        let assignment = self.model.instance().random_assignment(&mut self.rng);
        self.initialize_from(assignment);
    }

    /// Starts from the given assignment and clears the tabu list.
    ///
    /// # Panics
    ///
    /// Panics if `assignment` does not have one valid warehouse per customer.
    pub fn initialize_from(&mut self, assignment: Assignment) {
        let instance = self.model.instance();
        assert_eq!(
            assignment.len(),
            instance.num_customers(),
            "assignment must cover every customer"
        );
        self.best_cost = self.model.total_cost(&assignment);
        self.best_assignment.clone_from(&assignment);
        self.assignment = assignment;
        self.tabu_list.clear();
    }

    /// Runs Tabu Search from a fresh random assignment.
    pub fn solve(&mut self) -> TabuResult {
        self.initialize();
        self.search()
    }

    /// Runs Tabu Search starting from `assignment`.
    pub fn solve_from(&mut self, assignment: Assignment) -> TabuResult {
        self.initialize_from(assignment);
        self.search()
    }

    /// Best cost found so far.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Best assignment found so far.
    pub fn best_assignment(&self) -> &[usize] {
        &self.best_assignment
    }

    /// Current tabu list.
    pub fn tabu_list(&self) -> &TabuList {
        &self.tabu_list
    }

    fn search(&mut self) -> TabuResult {
        let mut cost_history = Vec::with_capacity(self.config.max_iterations);
        let mut moves = Vec::new();
        let mut best_iteration = 0;
        let mut stagnation = 0;
        let mut iteration = 0;

        log::debug!(
            "tabu search started: cost {:.3}, tenure {}",
            self.best_cost,
            self.tabu_list.tenure()
        );

        while iteration < self.config.max_iterations && stagnation < self.config.stagnation_limit {
            let previous_best = self.best_cost;

            match self.step() {
                Some(mv) => {
                    moves.push(mv);
                    if self.best_cost < previous_best {
                        best_iteration = iteration;
                        stagnation = 0;
                    } else {
                        stagnation += 1;
                    }
                }
                None => stagnation += 1,
            }

            cost_history.push(self.best_cost);
            iteration += 1;
        }

        if stagnation >= self.config.stagnation_limit {
            log::debug!("tabu search stagnated after {iteration} iterations");
        }

        log::info!(
            "tabu search finished: cost {:.3} after {} iterations, {} moves",
            self.best_cost,
            cost_history.len(),
            moves.len()
        );

        TabuResult {
            best: self.best_assignment.clone(),
            best_cost: self.best_cost,
            iterations: cost_history.len(),
            best_iteration,
            moves,
            cost_history,
        }
    }

    /// Performs one iteration, returning the applied move if any.
    fn step(&mut self) -> Option<Move> {
        let (mv, cost) = self.best_admissible_move()?;

        self.assignment[mv.customer] = mv.to;
        self.tabu_list.push(mv);

        if cost < self.best_cost {
            self.best_cost = cost;
            self.best_assignment.clone_from(&self.assignment);
        }

        Some(mv)
    }

    /// Finds the cheapest admissible move that improves on the best cost.
    fn best_admissible_move(&mut self) -> Option<(Move, f64)> {
        let num_warehouses = self.model.instance().num_warehouses();
        let threshold = self.best_cost;
        let mut best: Option<(Move, f64)> = None;

        for j in 0..self.assignment.len() {
            let current = self.assignment[j];
            for w in 0..num_warehouses {
                if w == current {
                    continue;
                }
                let mv = Move::new(j, current, w);
                let is_tabu = self.tabu_list.contains(&mv);
                if is_tabu && !self.config.aspiration {
                    continue;
                }

                self.assignment[j] = w;
                let cost = self.model.total_cost_with(&self.assignment, &mut self.scratch);
                self.assignment[j] = current;

                // Aspiration: a tabu move is admissible only if it beats the best.
                if is_tabu && cost >= threshold {
                    continue;
                }

                if cost < threshold && best.is_none_or(|(_, c)| cost < c) {
                    best = Some((mv, cost));
                }
            }
        }

        best
    }
}

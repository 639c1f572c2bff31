//! Local search execution engine.
//!
//! # Algorithm
//!
//! 1. Draw a uniformly random assignment; it is the initial best
//! 2. Each round, sweep customers in order and try every other warehouse,
//!    applying the first move with negative incremental cost
//! 3. A round without accepted moves counts as stagnant; after
//!    `max_stagnation` stagnant rounds, restart from a new random
//!    assignment
//! 4. Stop after `max_iterations` rounds or `max_resets` restarts
//! 5. Recompute the best cost from scratch

use rand::rngs::StdRng;

use super::config::LocalSearchConfig;
use crate::model::{Assignment, CostModel, ProblemInstance, WarehouseUsage};
use crate::random::rng_from_seed;

/// Result of a local search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchResult {
    /// Best assignment found.
    pub best: Assignment,
    /// Cost of `best`, recomputed from scratch.
    pub best_cost: f64,
    /// Rounds (full sweeps) executed.
    pub iterations: usize,
    /// Restarts triggered by stagnation.
    pub resets: usize,
    /// Best cost after each round.
    pub cost_history: Vec<f64>,
}

/// Local search solver over a shared [`ProblemInstance`].
///
/// # Examples
///
/// ```
/// use u_facility::local_search::{LocalSearchConfig, LocalSearchSolver};
/// use u_facility::model::ProblemInstance;
///
/// let instance = ProblemInstance::new(
///     vec![0.0, 0.0],
///     vec![0.0, 0.0],
///     vec![1, 1],
///     vec![vec![1.0, 2.0], vec![5.0, 6.0]],
/// )
/// .unwrap();
///
/// let mut solver = LocalSearchSolver::new(&instance, LocalSearchConfig::default().with_seed(1));
/// let result = solver.solve();
/// assert_eq!(result.best, vec![0, 0]);
/// assert_eq!(solver.best_cost(), 3.0);
/// ```
pub struct LocalSearchSolver<'a> {
    model: CostModel<'a>,
    config: LocalSearchConfig,
    rng: StdRng,
    assignment: Assignment,
    usage: WarehouseUsage,
    current_cost: f64,
    best_assignment: Assignment,
    best_cost: f64,
}

impl<'a> LocalSearchSolver<'a> {
    /// Creates a solver with its own generator seeded from `config.seed`.
    pub fn new(instance: &'a ProblemInstance, config: LocalSearchConfig) -> Self {
        let rng = rng_from_seed(config.seed);
        Self {
            model: CostModel::new(instance),
            config,
            rng,
            assignment: Vec::new(),
            usage: WarehouseUsage::new(instance.num_warehouses()),
            current_cost: f64::INFINITY,
            best_assignment: Vec::new(),
            best_cost: f64::INFINITY,
        }
    }

    /// Draws a random assignment and makes it the current and best solution.
    pub fn initialize(&mut self) {
        self.restart();
        self.best_assignment = self.assignment.clone();
        self.best_cost = self.current_cost;
    }

    /// Runs the search to its iteration or restart budget.
    pub fn solve(&mut self) -> LocalSearchResult {
        self.initialize();

        let max_iterations = self.config.max_iterations;
        let mut cost_history = Vec::with_capacity(max_iterations);
        let mut iteration = 0;
        let mut stagnation = 0;
        let mut resets = 0;

        while iteration < max_iterations && resets < self.config.max_resets {
            let improved = first_improvement_sweep(
                &self.model,
                &mut self.assignment,
                &mut self.usage,
                &mut self.current_cost,
            );

            if improved {
                stagnation = 0;
                if self.current_cost < self.best_cost {
                    self.best_cost = self.current_cost;
                    self.best_assignment.clone_from(&self.assignment);
                }
            } else {
                stagnation += 1;
                if stagnation >= self.config.max_stagnation {
                    resets += 1;
                    stagnation = 0;
                    log::debug!(
                        "local search stagnated at round {iteration}; restart {resets} (best {:.3})",
                        self.best_cost
                    );
                    self.restart();
                    if self.current_cost < self.best_cost {
                        self.best_cost = self.current_cost;
                        self.best_assignment.clone_from(&self.assignment);
                    }
                }
            }

            cost_history.push(self.best_cost);
            iteration += 1;
        }

        // Incremental updates may drift; report the exact value.
        self.best_cost = self.model.total_cost(&self.best_assignment);

        log::info!(
            "local search finished: cost {:.3} after {iteration} rounds, {resets} restarts",
            self.best_cost
        );

        LocalSearchResult {
            best: self.best_assignment.clone(),
            best_cost: self.best_cost,
            iterations: iteration,
            resets,
            cost_history,
        }
    }

    /// Best cost tracked so far; exact once [`solve`](Self::solve) returns.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Best assignment found so far.
    pub fn best_assignment(&self) -> &[usize] {
        &self.best_assignment
    }

    /// Replaces the working solution with a fresh random assignment.
    fn restart(&mut self) {
        let instance = self.model.instance();
        self.assignment = instance.random_assignment(&mut self.rng);
        self.usage.recompute(instance, &self.assignment);
        self.current_cost = self.model.total_cost(&self.assignment);
    }
}

/// One first-improvement pass over all single-customer reassignments.
///
/// Every accepted move updates `assignment`, `usage` and `cost` together.
/// Returns `true` if at least one move was applied.
pub(crate) fn first_improvement_sweep(
    model: &CostModel<'_>,
    assignment: &mut [usize],
    usage: &mut WarehouseUsage,
    cost: &mut f64,
) -> bool {
    let instance = model.instance();
    let mut improved = false;

    for j in 0..assignment.len() {
        for w in 0..instance.num_warehouses() {
            let current = assignment[j];
            if w == current {
                continue;
            }
            let delta = model.incremental_cost(j, current, w, usage);
            if delta < 0.0 {
                usage.transfer(instance.demand(j), current, w);
                assignment[j] = w;
                *cost += delta;
                improved = true;
            }
        }
    }

    improved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::{random_instance, tiny_two_warehouse};
    use crate::random::create_rng;

    #[test]
    fn test_local_search_two_warehouse_scenario() {
        let instance = ProblemInstance::new(
            vec![0.0, 0.0],
            vec![0.0, 0.0],
            vec![3, 4],
            vec![vec![2.0, 3.0], vec![7.0, 9.0]],
        )
        .unwrap();

        for seed in 0..10 {
            let mut solver =
                LocalSearchSolver::new(&instance, LocalSearchConfig::default().with_seed(seed));
            let result = solver.solve();
            assert_eq!(result.best, vec![0, 0], "seed {seed}");
            assert!((result.best_cost - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_local_search_tiny_costs() {
        let instance = tiny_two_warehouse();
        let model = CostModel::new(&instance);

        let mut assignment = vec![1, 1];
        let mut usage = WarehouseUsage::from_assignment(&instance, &assignment);
        let mut cost = model.total_cost(&assignment);
        assert!(first_improvement_sweep(&model, &mut assignment, &mut usage, &mut cost));
        assert_eq!(assignment, vec![0, 0]);

        for seed in 0..5 {
            let result =
                LocalSearchSolver::new(&instance, LocalSearchConfig::default().with_seed(seed))
                    .solve();
            assert_eq!(result.best, vec![0, 0], "seed {seed}");
            assert_eq!(result.best_cost, model.total_cost(&[0, 0]));
        }
    }

    #[test]
    fn test_local_search_single_warehouse() {
        let instance = ProblemInstance::new(
            vec![10.0],
            vec![4.0],
            vec![1, 2, 3],
            vec![vec![1.0, 2.0, 3.0]],
        )
        .unwrap();
        let mut solver = LocalSearchSolver::new(&instance, LocalSearchConfig::default().with_seed(5));
        let result = solver.solve();
        assert_eq!(result.best, vec![0, 0, 0]);
        assert!((result.best_cost - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_local_search_history_non_increasing() {
        let instance = random_instance(8, 40, 17);
        let mut solver =
            LocalSearchSolver::new(&instance, LocalSearchConfig::default().with_seed(42));
        let result = solver.solve();

        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_local_search_best_cost_matches_recomputation() {
        let instance = random_instance(10, 60, 3);
        let mut solver =
            LocalSearchSolver::new(&instance, LocalSearchConfig::default().with_seed(9));
        let result = solver.solve();

        let model = CostModel::new(&instance);
        assert_eq!(result.best_cost, model.total_cost(&result.best));
        assert_eq!(solver.best_cost(), result.best_cost);
        assert_eq!(solver.best_assignment(), result.best.as_slice());
        let last = *result.cost_history.last().unwrap();
        assert!(
            (last - result.best_cost).abs() < 1e-6,
            "tracked {last} vs recomputed {}",
            result.best_cost
        );
    }

    #[test]
    fn test_local_search_respects_budgets() {
        let instance = random_instance(6, 30, 5);
        let config = LocalSearchConfig::default()
            .with_max_stagnation(1)
            .with_max_resets(3)
            .with_seed(1);
        let mut solver = LocalSearchSolver::new(&instance, config);
        let result = solver.solve();

        assert!(result.iterations <= 200);
        assert_eq!(result.resets, 3, "stagnation of 1 should exhaust restarts");
        assert_eq!(result.cost_history.len(), result.iterations);
    }

    #[test]
    fn test_local_search_iteration_cap() {
        let instance = random_instance(6, 30, 8);
        let config = LocalSearchConfig::default()
            .with_max_iterations(4)
            .with_seed(2);
        let result = LocalSearchSolver::new(&instance, config).solve();
        assert!(result.iterations <= 4);
    }

    #[test]
    fn test_local_search_reproducible() {
        let instance = random_instance(7, 35, 21);
        let config = LocalSearchConfig::default().with_seed(123);
        let a = LocalSearchSolver::new(&instance, config.clone()).solve();
        let b = LocalSearchSolver::new(&instance, config).solve();
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_cost, b.best_cost);
    }

    #[test]
    fn test_sweep_incremental_matches_full() {
        let instance = random_instance(9, 50, 77);
        let model = CostModel::new(&instance);
        let mut rng = create_rng(4);

        for _ in 0..5 {
            let mut assignment = instance.random_assignment(&mut rng);
            let mut usage = WarehouseUsage::from_assignment(&instance, &assignment);
            let mut cost = model.total_cost(&assignment);
            let start = cost;

            while first_improvement_sweep(&model, &mut assignment, &mut usage, &mut cost) {
                let full = model.total_cost(&assignment);
                assert!(
                    (full - cost).abs() < 1e-6,
                    "incremental {cost} drifted from full {full}"
                );
                assert_eq!(usage, WarehouseUsage::from_assignment(&instance, &assignment));
            }
            assert!(cost <= start);
        }
    }

    #[test]
    fn test_sweep_local_optimum_has_no_improving_move() {
        let instance = random_instance(5, 25, 31);
        let model = CostModel::new(&instance);
        let mut assignment = instance.random_assignment(&mut create_rng(6));
        let mut usage = WarehouseUsage::from_assignment(&instance, &assignment);
        let mut cost = model.total_cost(&assignment);
        while first_improvement_sweep(&model, &mut assignment, &mut usage, &mut cost) {}

        for j in 0..instance.num_customers() {
            for w in 0..instance.num_warehouses() {
                let delta = model.incremental_cost(j, assignment[j], w, &usage);
                assert!(delta >= 0.0, "move ({j}, {w}) still improves by {delta}");
            }
        }
    }
}

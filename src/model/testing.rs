//! Instance builders shared by the solver tests.

use super::ProblemInstance;
use crate::random::create_rng;
use rand::Rng;

/// Random instance with positive fixed costs, demands and allocation costs.
pub(crate) fn random_instance(m: usize, n: usize, seed: u64) -> ProblemInstance {
    let mut rng = create_rng(seed);
    let fixed: Vec<f64> = (0..m).map(|_| rng.random_range(50.0..500.0)).collect();
    let demands: Vec<u64> = (0..n).map(|_| rng.random_range(1..40)).collect();
    let costs: Vec<Vec<f64>> = (0..m)
        .map(|_| (0..n).map(|_| rng.random_range(1.0..100.0)).collect::<Vec<f64>>())
        .collect();
    ProblemInstance::new(vec![0.0; m], fixed, demands, costs).unwrap()
}

/// Two free warehouses where warehouse 0 is cheaper for both customers,
/// with every cost around `1e-10`. Optimum is `[0, 0]` at `3e-10`.
pub(crate) fn tiny_two_warehouse() -> ProblemInstance {
    ProblemInstance::new(
        vec![0.0, 0.0],
        vec![0.0, 0.0],
        vec![1, 1],
        vec![vec![1e-10, 2e-10], vec![5e-10, 9e-10]],
    )
    .unwrap()
}

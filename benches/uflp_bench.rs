//! Criterion benchmarks for the UFLP solvers.
//!
//! Uses randomly generated instances of increasing size to measure solver
//! throughput and the cost of full versus incremental evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_facility::filter_fan::{FilterAndFanConfig, FilterAndFanSolver};
use u_facility::local_search::{LocalSearchConfig, LocalSearchSolver};
use u_facility::model::{CostModel, ProblemInstance, WarehouseUsage};
use u_facility::random::create_rng;
use u_facility::tabu::{TabuConfig, TabuSearchSolver};

// ===========================================================================
// Random instances
// ===========================================================================

fn random_instance(m: usize, n: usize) -> ProblemInstance {
    let mut rng = create_rng(42);
    let fixed: Vec<f64> = (0..m).map(|_| rng.random_range(1000.0..10000.0)).collect();
    let demands: Vec<u64> = (0..n).map(|_| rng.random_range(1..100)).collect();
    let costs: Vec<Vec<f64>> = (0..m)
        .map(|_| (0..n).map(|_| rng.random_range(10.0..1000.0)).collect::<Vec<f64>>())
        .collect();
    ProblemInstance::new(vec![0.0; m], fixed, demands, costs).unwrap()
}

const SIZES: [(usize, usize); 3] = [(16, 50), (25, 50), (50, 100)];

// ===========================================================================
// Cost evaluation
// ===========================================================================

fn bench_cost_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_model");

    for &(m, n) in &SIZES {
        let instance = random_instance(m, n);
        let model = CostModel::new(&instance);
        let assignment = instance.random_assignment(&mut create_rng(1));
        let usage = WarehouseUsage::from_assignment(&instance, &assignment);

        group.bench_with_input(
            BenchmarkId::new("total", format!("m{m}_n{n}")),
            &assignment,
            |b, a| b.iter(|| model.total_cost(black_box(a))),
        );
        group.bench_with_input(
            BenchmarkId::new("incremental", format!("m{m}_n{n}")),
            &usage,
            |b, u| {
                let from = assignment[0];
                let to = (from + 1) % m;
                b.iter(|| model.incremental_cost(black_box(0), from, to, u))
            },
        );
    }

    group.finish();
}

// ===========================================================================
// Solvers
// ===========================================================================

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solvers");
    group.sample_size(10);

    for &(m, n) in &SIZES {
        let instance = random_instance(m, n);
        let id = format!("m{m}_n{n}");

        group.bench_with_input(BenchmarkId::new("local_search", &id), &instance, |b, inst| {
            b.iter(|| {
                LocalSearchSolver::new(inst, LocalSearchConfig::default().with_seed(7)).solve()
            })
        });
        group.bench_with_input(BenchmarkId::new("tabu", &id), &instance, |b, inst| {
            b.iter(|| TabuSearchSolver::new(inst, TabuConfig::default().with_seed(7)).solve())
        });
        group.bench_with_input(BenchmarkId::new("filter_fan", &id), &instance, |b, inst| {
            b.iter(|| FilterAndFanSolver::new(inst, FilterAndFanConfig::default()).filter_and_fan())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cost_model, bench_solvers);
criterion_main!(benches);

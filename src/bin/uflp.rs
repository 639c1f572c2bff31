//! Command-line driver: loads an OR-Library instance, runs the solvers in
//! sequence and reports cost, runtime and the winning assignment.

use clap::{Parser, ValueEnum};
use log::info;
use took::Timer;

use u_facility::filter_fan::{FilterAndFanConfig, FilterAndFanSolver};
use u_facility::local_search::{LocalSearchConfig, LocalSearchSolver};
use u_facility::model::{CostModel, OrLibLoader, ProblemInstance};
use u_facility::tabu::{TabuConfig, TabuSearchSolver};

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq)]
enum SolverKind {
    All,
    LocalSearch,
    Tabu,
    FilterFan,
}

#[derive(Parser, Debug)]
#[command(version, about = "Uncapacitated facility location solvers")]
struct Args {
    #[arg(short, long, help = "instance file path (OR-Library format)")]
    instance: String,

    #[arg(long, help = "rng seed shared by all solvers")]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "all", help = "solver to run")]
    solver: SolverKind,

    #[arg(long, help = "tabu tenure", default_value_t = 10)]
    tenure: usize,

    #[arg(long, help = "filter-and-fan perturbation probability", default_value_t = 0.1)]
    perturbation: f64,

    #[arg(long, help = "print the warehouse of every customer", default_value = "false")]
    show_assignment: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    info!("{:?}", &args);

    let load_timer = Timer::new();
    let instance = OrLibLoader::new().from_path(&args.instance)?;
    info!(
        "instance loaded after {}: {} warehouses, {} customers",
        load_timer.took(),
        instance.num_warehouses(),
        instance.num_customers()
    );

    let run = |kind: SolverKind| args.solver == SolverKind::All || args.solver == kind;

    if run(SolverKind::LocalSearch) {
        let config = LocalSearchConfig {
            seed: args.seed,
            ..LocalSearchConfig::default()
        };
        let timer = Timer::new();
        let result = LocalSearchSolver::new(&instance, config).solve();
        report(&instance, "Local search", &result.best, result.best_cost, &timer, &args);
    }

    if run(SolverKind::Tabu) {
        let config = TabuConfig {
            seed: args.seed,
            ..TabuConfig::default().with_tenure(args.tenure)
        };
        let timer = Timer::new();
        let result = TabuSearchSolver::new(&instance, config).solve();
        report(&instance, "Tabu search", &result.best, result.best_cost, &timer, &args);
    }

    if run(SolverKind::FilterFan) {
        let mut config =
            FilterAndFanConfig::default().with_perturbation_probability(args.perturbation);
        if let Some(seed) = args.seed {
            config = config.with_seed(seed);
        }
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid filter-and-fan options: {e}"))?;
        let timer = Timer::new();
        let mut solver = FilterAndFanSolver::new(&instance, config);
        let solution = solver.filter_and_fan();
        let cost = solver.calculate_cost(&solution);
        report(&instance, "Filter-and-fan", &solution, cost, &timer, &args);
    }

    Ok(())
}

fn report(
    instance: &ProblemInstance,
    name: &str,
    assignment: &[usize],
    cost: f64,
    timer: &Timer,
    args: &Args,
) {
    let open = CostModel::new(instance).open_warehouses(assignment);
    println!("{name}: cost {cost:.3} in {}", timer.took());
    println!(
        "  open warehouses ({}): {}",
        open.len(),
        open.iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    if args.show_assignment {
        for (customer, warehouse) in assignment.iter().enumerate() {
            println!("  customer {customer} -> warehouse {warehouse}");
        }
    }
}

use profitpick::{
    action::{ActionRecord, ActionSet},
    solver::{DynamicProgrammingSolver, ExhaustiveSolver, GreedySolver, PrecisionConfig, Solver},
};

fn main() {
    divan::main()
}

fn sample_set(n: usize) -> ActionSet {
    ActionSet::build((0..n).map(|i| ActionRecord {
        name: format!("Share-{i}"),
        price: 5.25 + (i % 17) as f64 * 3.5,
        profit: 1.0 + (i % 7) as f64 * 2.5,
    }))
}

#[divan::bench]
fn greedy() {
    GreedySolver::new(true)
        .solve(&sample_set(1000), 500.0)
        .expect("Failed to solve");
}

#[divan::bench]
fn greedy_no_correction() {
    GreedySolver::new(false)
        .solve(&sample_set(1000), 500.0)
        .expect("Failed to solve");
}

#[divan::bench]
fn dynamic_programming() {
    let precision = PrecisionConfig::new(2).expect("Failed to build precision");
    DynamicProgrammingSolver::new(precision)
        .solve(&sample_set(200), 500.0)
        .expect("Failed to solve");
}

#[divan::bench]
fn exhaustive() {
    ExhaustiveSolver::default()
        .solve(&sample_set(15), 100.0)
        .expect("Failed to solve");
}

//! Performance benchmarks for the trajectory generators
//!
//! Compares the three generators on identical scenarios to measure their
//! relative per-step cost.
//!
//! # What We're Measuring
//!
//! 1. **Analytical**: one sin + one cos evaluation per sample
//! 2. **Euler**: one force evaluation and two fused updates per step
//! 3. **Verlet**: one force evaluation per step plus the recurrence
//!
//! All three are O(n) in the step count with O(1) scalar state, so the
//! interesting output is the constant factor — transcendental calls for
//! the analytical scheme against pure arithmetic for the recurrences.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all generator benchmarks
//! cargo bench --bench integrator_performance
//!
//! # Run only the Euler measurements
//! cargo bench --bench integrator_performance euler
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use oscil_rs::solver::{
    AnalyticalSolver, EulerSolver, Integrator, Scenario, StepConfiguration, VerletSolver,
};

/// Benchmark one generator across step counts
///
/// Step counts span three decades to confirm the linear scaling and to
/// expose any allocation overhead in trajectory storage (the exact-
/// capacity preallocation should make push costs invisible).
fn bench_generator(c: &mut Criterion, label: &str, generator: &dyn Integrator) {
    let mut group = c.benchmark_group(label);

    for steps in [100usize, 1_000, 10_000] {
        // Setup phase (not measured)
        let scenario = Scenario::classic();
        let config = StepConfiguration::new(steps, 0.25);

        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, _| {
            b.iter(|| {
                generator
                    .integrate(black_box(&scenario), black_box(&config))
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_analytical(c: &mut Criterion) {
    bench_generator(c, "Analytical Generator", &AnalyticalSolver::new());
}

fn benchmark_euler(c: &mut Criterion) {
    bench_generator(c, "Euler Generator", &EulerSolver::new());
}

fn benchmark_verlet(c: &mut Criterion) {
    bench_generator(c, "Verlet Generator", &VerletSolver::new());
}

/// Head-to-head comparison on the classic run
///
/// Single configuration (100 steps of 0.25 s), all three generators in
/// one group so criterion reports them side by side.
fn benchmark_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generator Comparison");

    let generators: Vec<(&str, Box<dyn Integrator>)> = vec![
        ("Analytical", Box::new(AnalyticalSolver::new())),
        ("Euler", Box::new(EulerSolver::new())),
        ("Verlet", Box::new(VerletSolver::new())),
    ];

    let scenario = Scenario::classic();
    let config = StepConfiguration::new(100, 0.25);

    for (name, generator) in &generators {
        group.bench_function(*name, |b| {
            b.iter(|| {
                generator
                    .integrate(black_box(&scenario), black_box(&config))
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_analytical,
    benchmark_euler,
    benchmark_verlet,
    benchmark_comparison,
);
criterion_main!(benches);

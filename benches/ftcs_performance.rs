//! Performance benchmarks for the FTCS solver
//!
//! # What We're Measuring
//!
//! 1. **Dense solver** (`FtcsSolver`):
//!    - full `nx × nt` history in one matrix
//!    - 3 multiply-adds per interior node per step
//!
//! 2. **Streaming stepper** (`FtcsStepper`):
//!    - same recurrence, two columns of memory
//!    - no history allocation
//!
//! 3. **Parallel sweep** (feature `parallel`):
//!    - one long column split across Rayon workers
//!    - compared against the sequential sweep by moving the threshold
//!
//! # Expected Results
//!
//! **Scaling**: time ∝ nodes × steps for both methods.
//!
//! **Stepper vs solver**: close for small grids; the stepper wins once the
//! history no longer fits in cache.
//!
//! **Parallel sweep**: only pays off for columns of several thousand nodes.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench ftcs_performance
//!
//! # Only the dense solver
//! cargo bench --bench ftcs_performance "FTCS Solver"
//!
//! # Parallel threshold comparison
//! cargo bench --bench ftcs_performance parallel
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;

use heat_rs::solver::{
    parallel_threshold, set_parallel_threshold, FtcsSolver, FtcsStepper, Scenario, Solver,
    SolverConfiguration,
};

// =================================================================================================
// Configuration Helpers
// =================================================================================================

/// Ratio used by every benchmark grid
///
/// Stable, so no benchmark runs into overflowed values.
const BENCH_RATIO: f64 = 0.4;

/// Grid with `nodes × steps` points on `[0, 1]` and `r = BENCH_RATIO`
///
/// The horizon is derived from the grid so that α·dt/dx² stays fixed.
fn stable_config(nodes: usize, steps: usize) -> SolverConfiguration {
    let alpha = 0.1;
    let dx = 1.0 / (nodes - 1) as f64;
    let horizon = BENCH_RATIO * dx * dx * (steps - 1) as f64 / alpha;

    SolverConfiguration::new(steps, nodes, alpha, 1.0, horizon)
}

// =================================================================================================
// Benchmarks
// =================================================================================================

/// Dense solver with growing meshes, fixed number of steps
fn benchmark_ftcs_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("FTCS Solver");
    let scenario = Scenario::default();
    let solver = FtcsSolver::new();

    for nodes in [20, 100, 500, 2000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(nodes), nodes, |b, &nodes| {
            let config = stable_config(nodes, 1000);

            b.iter(|| solver.solve(black_box(&scenario), black_box(&config)).unwrap());
        });
    }

    group.finish();
}

/// Dense history against the two-column stepper on identical grids
fn benchmark_solver_vs_stepper(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solver vs Stepper");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(10));

    let scenario = Scenario::default();
    let solver = FtcsSolver::new();

    for nodes in [100, 1000].iter() {
        let config = stable_config(*nodes, 2000);

        group.bench_with_input(BenchmarkId::new("dense", nodes), &config, |b, config| {
            b.iter(|| solver.solve(black_box(&scenario), black_box(config)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("stepper", nodes), &config, |b, config| {
            b.iter(|| {
                FtcsStepper::new(black_box(&scenario), black_box(config))
                    .unwrap()
                    .last()
            });
        });
    }

    group.finish();
}

/// One long column, sequential and parallel sweeps
///
/// Without the `parallel` feature both variants run sequentially.
fn benchmark_parallel_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel sweep");
    group.sampling_mode(SamplingMode::Flat);

    let scenario = Scenario::default();
    let config = stable_config(200_000, 20);
    let previous = parallel_threshold();

    for (label, threshold) in [("sequential", usize::MAX), ("parallel", 1)] {
        set_parallel_threshold(threshold);
        group.bench_function(label, |b| {
            b.iter(|| {
                FtcsStepper::new(black_box(&scenario), black_box(&config))
                    .unwrap()
                    .last()
            });
        });
    }

    set_parallel_threshold(previous);
    group.finish();
}

criterion_group!(
    benches,
    benchmark_ftcs_solver,
    benchmark_solver_vs_stepper,
    benchmark_parallel_sweep,
);
criterion_main!(benches);

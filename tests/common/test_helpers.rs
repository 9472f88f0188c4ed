//! Helper functions for integration tests

use heat_rs::physics::HeatModel;
use heat_rs::solver::{FtcsSolver, Scenario, SimulationResult, Solver, SolverConfiguration};

/// Solve `model` on `config` with the FTCS solver
pub fn solve(model: impl HeatModel + 'static, config: &SolverConfiguration) -> SimulationResult {
    let scenario = Scenario::new(Box::new(model));
    FtcsSolver::new()
        .solve(&scenario, config)
        .expect("valid configuration")
}

/// Assert that two profiles agree node by node within `tolerance`
pub fn assert_profiles_close(a: &[f64], b: &[f64], tolerance: f64, message: &str) {
    assert_eq!(a.len(), b.len(), "{}: Dimension mismatch", message);

    for (i, (&u, &v)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (u - v).abs();
        assert!(
            diff <= tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Largest deviation of any interior value from the three-point recurrence
///
/// Recomputes `r·U[i-1][j-1] + (1-2r)·U[i][j-1] + r·U[i+1][j-1]` from the
/// stored history and compares with `U[i][j]`.
pub fn max_stencil_residual(result: &SimulationResult) -> f64 {
    let r = result.ratio;
    let r2 = 1.0 - 2.0 * r;
    let field = &result.field;
    let mut worst: f64 = 0.0;

    for j in 1..field.ncols() {
        for i in 1..field.nrows() - 1 {
            let expected = r * field[(i - 1, j - 1)] + r2 * field[(i, j - 1)] + r * field[(i + 1, j - 1)];
            worst = worst.max((field[(i, j)] - expected).abs());
        }
    }

    worst
}

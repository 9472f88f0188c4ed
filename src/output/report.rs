//! Console summary of a run
//!
//! Two lines: the L2 error at the final time, then the discretization steps
//! and the stability ratio.
//!
//! ```text
//! Error in FTCS solution =  2.404e-2 at t =   0.5000
//! dt, dx, r = 0.055556, 0.052632, 2.0056
//! ```

use crate::solver::SimulationResult;

/// Build the two-line summary
///
/// A result without error (model with no closed form) reports `n/a`.
pub fn format_report(result: &SimulationResult) -> String {
    let error = match result.error {
        Some(e) => format!("{:10.3e}", e),
        None => format!("{:>10}", "n/a"),
    };

    format!(
        "Error in FTCS solution = {} at t = {:8.4}\ndt, dx, r = {:.6}, {:.6}, {:.4}",
        error,
        result.final_time(),
        result.dt,
        result.dx,
        result.ratio
    )
}

/// Print [`format_report`] to stdout
pub fn print_report(result: &SimulationResult) {
    println!("{}", format_report(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FtcsSolver, Scenario, Solver, SolverConfiguration};

    #[test]
    fn test_report_default_run() {
        let result = FtcsSolver::new()
            .solve(&Scenario::default(), &SolverConfiguration::default())
            .unwrap();

        let report = format_report(&result);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Error in FTCS solution = "));
        assert!(lines[0].contains("e-2"));
        assert!(lines[0].ends_with("at t =   0.5000"));
        assert_eq!(lines[1], "dt, dx, r = 0.055556, 0.052632, 2.0056");
    }

    #[test]
    fn test_report_without_error() {
        let mut result = FtcsSolver::new()
            .solve(&Scenario::default(), &SolverConfiguration::default())
            .unwrap();
        result.error = None;

        assert!(format_report(&result).contains("n/a"));
    }
}

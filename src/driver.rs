//! Single-call entry point
//!
//! [`heat_ftcs`] runs the default sine problem with the five numeric
//! parameters of a [`SolverConfiguration`]. When `produce_plots` is set it
//! also prints the console report and writes two figures into `plot_dir`:
//!
//! - `ftcs_solution.png`: FTCS nodes against the exact curve at the final time
//! - `ftcs_error.png`: pointwise error `u − u_e` at the final time
//!
//! # Example
//!
//! ```rust
//! use heat_rs::driver::heat_ftcs;
//! use heat_rs::solver::SolverConfiguration;
//!
//! let result = heat_ftcs(&SolverConfiguration::default()).unwrap();
//! let error = result.error.unwrap();
//! assert!(error > 1e-3 && error < 5e-2);
//! ```

use std::error::Error;
use std::path::Path;

use nalgebra::DVector;

use crate::output::report::print_report;
use crate::output::visualization::{plot_error, plot_solution, PlotConfig};
use crate::solver::{accuracy, FtcsSolver, Scenario, SimulationResult, Solver, SolverConfiguration};

/// Resolution of the exact curve drawn behind the FTCS markers
const EXACT_CURVE_POINTS: usize = 201;

/// File name of the solution figure
pub const SOLUTION_PLOT: &str = "ftcs_solution.png";

/// File name of the error figure
pub const ERROR_PLOT: &str = "ftcs_error.png";

/// Solve the default problem `u(x, 0) = sin(πx/L)`, `u(0) = u(L) = 0`
///
/// Returns the full result: mesh, time points, field history and error.
///
/// # Errors
///
/// Invalid configuration, or a plotting failure when `produce_plots` is set.
pub fn heat_ftcs(config: &SolverConfiguration) -> Result<SimulationResult, Box<dyn Error>> {
    heat_ftcs_with(&Scenario::default(), config)
}

/// Same as [`heat_ftcs`] for an arbitrary scenario
pub fn heat_ftcs_with(
    scenario: &Scenario,
    config: &SolverConfiguration,
) -> Result<SimulationResult, Box<dyn Error>> {
    let result = FtcsSolver::new().solve(scenario, config)?;

    if config.produce_plots {
        print_report(&result);
        write_plots(scenario, config, &result, &config.plot_dir)?;
    }

    Ok(result)
}

/// Write the solution and error figures for the final time into `dir`
///
/// Models without a closed form have nothing to compare against; a warning
/// is logged and no file is written.
pub fn write_plots(
    scenario: &Scenario,
    config: &SolverConfiguration,
    result: &SimulationResult,
    dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let t = result.final_time();
    let computed = result.final_profile().ok_or("Empty result, nothing to plot")?;

    let fine_x = DVector::from_fn(EXACT_CURVE_POINTS, |i, _| {
        config.length * i as f64 / (EXACT_CURVE_POINTS - 1) as f64
    });
    let exact_curve = accuracy::exact_profile(scenario, &fine_x, t, config.diffusivity, config.length);
    let error = accuracy::pointwise_error(
        scenario,
        &result.x,
        computed.as_slice(),
        t,
        config.diffusivity,
        config.length,
    );

    let (Some(exact_curve), Some(error)) = (exact_curve, error) else {
        log::warn!(
            "Model {} has no closed form, skipping plots",
            scenario.get_model_name()
        );
        return Ok(());
    };

    std::fs::create_dir_all(dir)?;
    let solution_path = dir.join(SOLUTION_PLOT);
    let error_path = dir.join(ERROR_PLOT);
    let title = format!("t = {:.4}", t);

    plot_solution(
        result.x.as_slice(),
        computed.as_slice(),
        (fine_x.as_slice(), exact_curve.as_slice()),
        solution_path.to_str().ok_or("Plot path is not valid UTF-8")?,
        Some(&PlotConfig::solution(title.as_str())),
    )?;

    plot_error(
        result.x.as_slice(),
        error.as_slice(),
        error_path.to_str().ok_or("Plot path is not valid UTF-8")?,
        Some(&PlotConfig::error(title.as_str())),
    )?;

    log::info!("Plots written to {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::HeatModel;

    struct Flat;

    impl HeatModel for Flat {
        fn initial_value(&self, _x: f64, _length: f64) -> f64 {
            1.0
        }

        fn name(&self) -> &str {
            "Flat"
        }
    }

    #[test]
    fn test_heat_ftcs_default() {
        let result = heat_ftcs(&SolverConfiguration::default()).unwrap();

        assert_eq!(result.nodes(), 20);
        assert_eq!(result.len(), 10);
        assert!((result.error.unwrap() - 0.02403698).abs() < 1e-6);
    }

    #[test]
    fn test_heat_ftcs_invalid() {
        let err = heat_ftcs(&SolverConfiguration::default().with_nodes(2)).unwrap_err();
        assert!(err.to_string().contains("spatial nodes"));
    }

    #[test]
    fn test_write_plots_skips_without_closed_form() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = Scenario::new(Box::new(Flat));
        let config = SolverConfiguration::default();
        let result = FtcsSolver::new().solve(&scenario, &config).unwrap();

        write_plots(&scenario, &config, &result, dir.path()).unwrap();
        assert!(!dir.path().join(SOLUTION_PLOT).exists());
    }

    #[test]
    fn test_write_plots_rejects_empty_result() {
        let dir = tempfile::tempdir().unwrap();
        let empty = SimulationResult::new(
            DVector::zeros(0),
            DVector::zeros(0),
            nalgebra::DMatrix::zeros(0, 0),
            0.0,
            0.0,
            0.0,
        );

        let err = write_plots(&Scenario::default(), &SolverConfiguration::default(), &empty, dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("Empty result"));
        assert!(!dir.path().join(SOLUTION_PLOT).exists());
    }

    #[test]
    fn test_heat_ftcs_with_plots() {
        let dir = tempfile::tempdir().unwrap();
        let config = SolverConfiguration::default()
            .with_steps(200)
            .with_plots(dir.path());

        heat_ftcs(&config).unwrap();

        assert!(dir.path().join(SOLUTION_PLOT).exists());
        assert!(dir.path().join(ERROR_PLOT).exists());
    }
}

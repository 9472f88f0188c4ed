//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - `SolverConfiguration` holds the five numerical parameters of a run plus
//!   the presentation switch, each with a documented default
//! - `Solver` is the interface implemented by dense-history methods
//! - `SimulationResult` bundles the mesh, the time grid, the field matrix and
//!   the error against the closed form in a single return type

use std::collections::HashMap;
use std::path::PathBuf;

use nalgebra::{DMatrix, DVector};

use crate::solver::scenario::Scenario;

// =================================================================================================
// Default parameters
// =================================================================================================

/// Default number of time points `nt`
pub const DEFAULT_STEPS: usize = 10;

/// Default number of spatial nodes `nx`
pub const DEFAULT_NODES: usize = 20;

/// Default diffusivity α
pub const DEFAULT_DIFFUSIVITY: f64 = 0.1;

/// Default domain length L
pub const DEFAULT_LENGTH: f64 = 1.0;

/// Default simulation horizon `tmax`
pub const DEFAULT_HORIZON: f64 = 0.5;

/// Largest stability ratio for which FTCS does not amplify any mode
pub const STABILITY_LIMIT: f64 = 0.5;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration of one FTCS run
///
/// # Fields
///
/// - `steps`: number of time points `nt`, including `t = 0` (default 10)
/// - `nodes`: number of spatial nodes `nx`, including both edges (default 20)
/// - `diffusivity`: α (default 0.1)
/// - `length`: L (default 1.0)
/// - `horizon`: final time `tmax` (default 0.5)
/// - `produce_plots`: write figures after solving (default false)
/// - `plot_dir`: directory receiving the figures (default ".")
///
/// # Example
///
/// ```rust
/// use heat_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::default()
///     .with_nodes(40)
///     .with_steps(200);
///
/// assert!(config.stability_ratio() < 0.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Number of time points nt (≥ 2)
    pub steps: usize,

    /// Number of spatial nodes nx (≥ 3)
    pub nodes: usize,

    /// Diffusivity α (≥ 0)
    pub diffusivity: f64,

    /// Domain length L (> 0)
    pub length: f64,

    /// Final time tmax (> 0)
    pub horizon: f64,

    /// Produce the console report and figures
    pub produce_plots: bool,

    /// Output directory for figures
    pub plot_dir: PathBuf,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            nodes: DEFAULT_NODES,
            diffusivity: DEFAULT_DIFFUSIVITY,
            length: DEFAULT_LENGTH,
            horizon: DEFAULT_HORIZON,
            produce_plots: false,
            plot_dir: PathBuf::from("."),
        }
    }
}

impl SolverConfiguration {
    /// Create a configuration from the five numerical parameters
    pub fn new(steps: usize, nodes: usize, diffusivity: f64, length: f64, horizon: f64) -> Self {
        Self {
            steps,
            nodes,
            diffusivity,
            length,
            horizon,
            ..Default::default()
        }
    }

    /// Builder pattern: set number of time points
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Builder pattern: set number of spatial nodes
    pub fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    /// Builder pattern: set diffusivity
    pub fn with_diffusivity(mut self, diffusivity: f64) -> Self {
        self.diffusivity = diffusivity;
        self
    }

    /// Builder pattern: set domain length
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Builder pattern: set final time
    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Builder pattern: enable figures, written into `dir`
    pub fn with_plots(mut self, dir: impl Into<PathBuf>) -> Self {
        self.produce_plots = true;
        self.plot_dir = dir.into();
        self
    }

    /// Spatial step dx = L / (nx - 1)
    pub fn dx(&self) -> f64 {
        self.length / (self.nodes as f64 - 1.0)
    }

    /// Time step dt = tmax / (nt - 1)
    pub fn dt(&self) -> f64 {
        self.horizon / (self.steps as f64 - 1.0)
    }

    /// Stability ratio r = α·dt/dx²
    pub fn stability_ratio(&self) -> f64 {
        let dx = self.dx();
        self.diffusivity * self.dt() / (dx * dx)
    }

    /// Whether `r ≤ 0.5`
    pub fn is_stable(&self) -> bool {
        self.stability_ratio() <= STABILITY_LIMIT
    }

    /// Validate configuration
    ///
    /// Rejects inputs for which the mesh or the stencil is undefined.
    /// An unstable ratio is NOT rejected; see [`Self::is_stable`].
    pub fn validate(&self) -> Result<(), String> {
        if self.nodes < 3 {
            return Err(format!(
                "Need at least 3 spatial nodes (one interior node), got {}",
                self.nodes
            ));
        }
        if self.steps < 2 {
            return Err(format!(
                "Need at least 2 time points, got {}",
                self.steps
            ));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(format!("Domain length must be positive, got {}", self.length));
        }
        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(format!("Horizon must be positive, got {}", self.horizon));
        }
        if !self.diffusivity.is_finite() || self.diffusivity < 0.0 {
            return Err(format!(
                "Diffusivity must be non-negative, got {}",
                self.diffusivity
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Solver Trait
// =================================================================================================

/// Interface of solvers that keep the full time history
pub trait Solver {
    /// Solve `scenario` on the mesh described by `config`
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String>;

    /// Human-readable method name
    fn name(&self) -> &str;
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Output of a dense-history solve
///
/// `field` has shape `nx × nt`: column `j` is the temperature profile at
/// `time_points[j]`, row `i` is the history of node `x[i]`.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Spatial coordinates x_i = i·dx
    pub x: DVector<f64>,

    /// Time coordinates t_j = j·dt
    pub time_points: DVector<f64>,

    /// Field matrix U (nx × nt)
    pub field: DMatrix<f64>,

    /// Spatial step
    pub dx: f64,

    /// Time step
    pub dt: f64,

    /// Stability ratio α·dt/dx²
    pub ratio: f64,

    /// L2 norm of U(:, nt-1) - u_exact, when the model has a closed form
    pub error: Option<f64>,

    /// Free-form diagnostics (solver name, model, parameters)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create a result without error or metadata
    pub fn new(
        x: DVector<f64>,
        time_points: DVector<f64>,
        field: DMatrix<f64>,
        dx: f64,
        dt: f64,
        ratio: f64,
    ) -> Self {
        Self {
            x,
            time_points,
            field,
            dx,
            dt,
            ratio,
            error: None,
            metadata: HashMap::new(),
        }
    }

    /// Number of time points stored
    pub fn len(&self) -> usize {
        self.field.ncols()
    }

    /// Whether no time point is stored
    pub fn is_empty(&self) -> bool {
        self.field.ncols() == 0
    }

    /// Number of spatial nodes
    pub fn nodes(&self) -> usize {
        self.field.nrows()
    }

    /// Time of the last column
    pub fn final_time(&self) -> f64 {
        self.time_points.iter().last().copied().unwrap_or(0.0)
    }

    /// Temperature profile at time index `j`
    pub fn column(&self, j: usize) -> DVector<f64> {
        self.field.column(j).into_owned()
    }

    /// Temperature profile at the final time, `None` for an empty field
    pub fn final_profile(&self) -> Option<DVector<f64>> {
        self.len().checked_sub(1).map(|j| self.column(j))
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = SolverConfiguration::default();
        assert_eq!(config.steps, 10);
        assert_eq!(config.nodes, 20);
        assert_eq!(config.diffusivity, 0.1);
        assert_eq!(config.length, 1.0);
        assert_eq!(config.horizon, 0.5);
        assert!(!config.produce_plots);
    }

    #[test]
    fn test_derived_steps() {
        let config = SolverConfiguration::default();
        assert!((config.dx() - 1.0 / 19.0).abs() < 1e-15);
        assert!((config.dt() - 0.5 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn test_default_ratio_is_above_limit() {
        // 0.1 · (0.5/9) · 19² ≈ 2.0056
        let config = SolverConfiguration::default();
        assert!((config.stability_ratio() - 2.005_555_555_555_555).abs() < 1e-12);
        assert!(!config.is_stable());
    }

    #[test]
    fn test_builder() {
        let config = SolverConfiguration::default()
            .with_steps(100)
            .with_nodes(11)
            .with_diffusivity(0.5)
            .with_length(2.0)
            .with_horizon(1.0)
            .with_plots("figures");

        assert_eq!(config.steps, 100);
        assert_eq!(config.nodes, 11);
        assert_eq!(config.diffusivity, 0.5);
        assert_eq!(config.length, 2.0);
        assert_eq!(config.horizon, 1.0);
        assert!(config.produce_plots);
        assert_eq!(config.plot_dir, PathBuf::from("figures"));
    }

    #[test]
    fn test_validate_accepts_defaults_and_zero_diffusivity() {
        assert!(SolverConfiguration::default().validate().is_ok());
        assert!(SolverConfiguration::default().with_diffusivity(0.0).validate().is_ok());
        assert!(SolverConfiguration::new(2, 3, 0.1, 1.0, 0.5).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_mesh() {
        let err = SolverConfiguration::default().with_nodes(2).validate().unwrap_err();
        assert!(err.contains("at least 3 spatial nodes"));

        let err = SolverConfiguration::default().with_steps(1).validate().unwrap_err();
        assert!(err.contains("at least 2 time points"));
    }

    #[test]
    fn test_validate_rejects_bad_physics() {
        assert!(SolverConfiguration::default().with_length(0.0).validate().is_err());
        assert!(SolverConfiguration::default().with_horizon(-1.0).validate().is_err());
        assert!(SolverConfiguration::default().with_diffusivity(-0.1).validate().is_err());
        assert!(SolverConfiguration::default().with_diffusivity(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_result_accessors() {
        let x = DVector::from_vec(vec![0.0, 0.5, 1.0]);
        let t = DVector::from_vec(vec![0.0, 0.25]);
        let field = DMatrix::from_column_slice(3, 2, &[0.0, 1.0, 0.0, 0.0, 0.6, 0.0]);

        let mut result = SimulationResult::new(x, t, field, 0.5, 0.25, 0.1);
        result.add_metadata("solver", "FTCS");

        assert_eq!(result.len(), 2);
        assert_eq!(result.nodes(), 3);
        assert!(!result.is_empty());
        assert_eq!(result.final_time(), 0.25);
        assert_eq!(result.final_profile().unwrap()[1], 0.6);
        assert_eq!(result.column(0)[1], 1.0);
        assert_eq!(result.get_metadata("solver"), Some("FTCS"));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_empty_result_has_no_final_profile() {
        let result = SimulationResult::new(
            DVector::zeros(0),
            DVector::zeros(0),
            DMatrix::zeros(0, 0),
            0.5,
            0.25,
            0.1,
        );

        assert!(result.is_empty());
        assert_eq!(result.final_time(), 0.0);
        assert!(result.final_profile().is_none());
    }
}

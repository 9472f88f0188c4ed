//! Forward-Time Centered-Space solver
//!
//! # Mathematical Background
//!
//! Replacing ∂u/∂t by a forward difference and ∂²u/∂x² by a centered
//! difference in
//!
//! ```text
//! ∂u/∂t = α ∂²u/∂x²
//! ```
//!
//! gives the explicit update
//!
//! ```text
//! U[i][j] = r·U[i-1][j-1] + (1 - 2r)·U[i][j-1] + r·U[i+1][j-1],   r = α·dt/dx²
//! ```
//!
//! for every interior node `i = 1..nx-2`. The edge nodes hold the
//! Dirichlet constants.
//!
//! # Characteristics
//!
//! - **Order**: O(dt) in time, O(dx²) in space
//! - **Stability**: von Neumann stable iff r ≤ 0.5
//! - **Complexity**: O(nx) per column, O(nx·nt) per run
//! - **Memory**: O(nx·nt) - the whole history is kept
//!
//! Nothing stops an unstable run. With r > 0.5 the highest mode is amplified
//! by `|1 - 4r| > 1` each step and the field eventually blows up; the solver
//! only logs a warning.
//!
//! # Example
//!
//! ```rust
//! use heat_rs::solver::{FtcsSolver, Scenario, Solver, SolverConfiguration};
//!
//! let scenario = Scenario::default();
//! let config = SolverConfiguration::default();
//!
//! let result = FtcsSolver::new().solve(&scenario, &config).unwrap();
//! assert_eq!(result.field.shape(), (20, 10));
//! assert!(result.error.unwrap() < 0.05);
//! ```

use nalgebra::DMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::solver;
use crate::solver::accuracy;
use crate::solver::boundary::DirichletBoundaries;
use crate::solver::mesh::Discretization;
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// Stencil
// =================================================================================================

/// Compute one time column from the previous one
///
/// Interior nodes receive the three-point stencil; the two edge nodes receive
/// the boundary constants. `previous` and `next` must have the same length,
/// at least 3.
///
/// Each interior node only reads `previous`, so the sweep is dispatched to
/// Rayon when the column holds at least [`solver::parallel_threshold()`]
/// interior nodes (feature `parallel`).
pub(crate) fn advance_column(
    previous: &[f64],
    next: &mut [f64],
    r: f64,
    r2: f64,
    boundaries: &DirichletBoundaries,
) {
    let n = previous.len();
    debug_assert_eq!(n, next.len(), "column length mismatch");
    debug_assert!(n >= 3, "FTCS needs at least one interior node");

    let parallel = n - 2 >= solver::parallel_threshold();
    sweep_interior(previous, &mut next[1..n - 1], r, r2, parallel);

    boundaries.apply(next);
}

/// Three-point stencil on the interior nodes
///
/// `interior[k]` receives node `k + 1` of the new column. Without the
/// `parallel` feature, `parallel = true` falls back to the sequential loop.
fn sweep_interior(previous: &[f64], interior: &mut [f64], r: f64, r2: f64, parallel: bool) {
    let update = |(k, u): (usize, &mut f64)| {
        let i = k + 1;
        *u = r * previous[i - 1] + r2 * previous[i] + r * previous[i + 1];
    };

    if parallel {
        #[cfg(feature = "parallel")]
        interior.par_iter_mut().enumerate().for_each(update);
        #[cfg(not(feature = "parallel"))]
        interior.iter_mut().enumerate().for_each(update);
    } else {
        interior.iter_mut().enumerate().for_each(update);
    }
}

/// Initial column `u(x_i, 0)` with the boundary constants on the edges
pub(crate) fn initial_column(scenario: &Scenario, mesh: &Discretization, length: f64) -> Vec<f64> {
    let mut column: Vec<f64> = mesh
        .x
        .iter()
        .map(|&x| scenario.model().initial_value(x, length))
        .collect();
    scenario.boundaries().apply(&mut column);
    column
}

// =================================================================================================
// FTCS Solver
// =================================================================================================

/// Explicit FTCS solver keeping the full `nx × nt` history
///
/// # Algorithm
///
/// 1. Build mesh, time grid and weights r, 1 - 2r
/// 2. Seed column 0 with the model's initial profile and the edge constants
/// 3. For each column j = 1..nt-1, apply the stencil to column j-1
/// 4. Compare column nt-1 with the closed form (if any)
///
/// Columns are computed strictly in order; column j only reads column j-1.
#[derive(Debug, Clone, Copy, Default)]
pub struct FtcsSolver;

impl FtcsSolver {
    /// Create a new FTCS solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use heat_rs::solver::{FtcsSolver, Solver};
    ///
    /// let solver = FtcsSolver::new();
    /// assert_eq!(solver.name(), "FTCS");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for FtcsSolver {

    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> Result<SimulationResult, String> {

        // ====== Step 1: Validation and discretization ======

        config.validate()?;
        scenario.validate()?;

        let mesh = Discretization::new(config);
        let (nx, nt) = (mesh.nodes(), mesh.steps());

        log::debug!(
            "FTCS setup: nx = {nx}, nt = {nt}, dx = {}, dt = {}, r = {}",
            mesh.dx, mesh.dt, mesh.r
        );
        solver::warn_if_unstable(mesh.r);

        // ====== Step 2: Initial and boundary conditions ======

        // Column-major storage: column j occupies [j·nx, (j+1)·nx)
        let mut field = DMatrix::<f64>::zeros(nx, nt);
        field
            .as_mut_slice()[..nx]
            .copy_from_slice(&initial_column(scenario, &mesh, config.length));

        // ====== Step 3: Time stepping ======

        for j in 1..nt {
            let (done, pending) = field.as_mut_slice().split_at_mut(j * nx);
            advance_column(
                &done[(j - 1) * nx..],
                &mut pending[..nx],
                mesh.r,
                mesh.r2,
                scenario.boundaries(),
            );
        }

        let final_column = &field.as_slice()[(nt - 1) * nx..];
        solver::warn_if_not_finite(final_column, nt - 1);

        // ====== Step 4: Error evaluation ======

        let error = accuracy::l2_error(
            scenario,
            &mesh.x,
            final_column,
            mesh.final_time(),
            config.diffusivity,
            config.length,
        );

        // ====== Step 5: Build Result ======

        let mut result = SimulationResult::new(
            mesh.x.clone(),
            mesh.t.clone(),
            field,
            mesh.dx,
            mesh.dt,
            mesh.r,
        );
        result.error = error;

        result.add_metadata("solver", self.name());
        result.add_metadata("model", scenario.get_model_name());
        result.add_metadata("nodes", &nx.to_string());
        result.add_metadata("time steps", &nt.to_string());
        result.add_metadata("diffusivity", &config.diffusivity.to_string());
        result.add_metadata("length", &config.length.to_string());
        result.add_metadata("horizon", &config.horizon.to_string());

        match error {
            Some(e) => log::info!("FTCS finished: L2 error = {e:.3e} at t = {}", mesh.final_time()),
            None => log::info!("FTCS finished at t = {} (no closed form)", mesh.final_time()),
        }

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "FTCS"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Uniform space-time discretization
//!
//! Phase 1 of a run: turns the five numerical parameters into the spatial
//! and temporal grids and the stencil weights.
//!
//! ```text
//! dx = L / (nx - 1)        x_i = i·dx,  i = 0..nx-1
//! dt = tmax / (nt - 1)     t_j = j·dt,  j = 0..nt-1
//! r  = α·dt/dx²            r2  = 1 - 2r
//! ```
//!
//! Coordinates are computed from the index, not accumulated, so that
//! `x[nx-1]` and `t[nt-1]` do not drift.

use nalgebra::DVector;

use crate::solver::traits::{SolverConfiguration, STABILITY_LIMIT};

/// Immutable mesh, time grid and FTCS weights
#[derive(Clone, Debug, PartialEq)]
pub struct Discretization {
    /// Spatial step
    pub dx: f64,

    /// Time step
    pub dt: f64,

    /// Stability ratio r = α·dt/dx²
    pub r: f64,

    /// Centre weight 1 - 2r
    pub r2: f64,

    /// Spatial coordinates (nx)
    pub x: DVector<f64>,

    /// Time coordinates (nt)
    pub t: DVector<f64>,
}

impl Discretization {
    /// Build the grids for `config`
    ///
    /// No validation happens here; see [`SolverConfiguration::validate`].
    pub fn new(config: &SolverConfiguration) -> Self {
        let dx = config.dx();
        let dt = config.dt();
        let r = config.diffusivity * dt / (dx * dx);
        let r2 = 1.0 - 2.0 * r;

        let x = DVector::from_fn(config.nodes, |i, _| i as f64 * dx);
        let t = DVector::from_fn(config.steps, |j, _| j as f64 * dt);

        Self { dx, dt, r, r2, x, t }
    }

    /// Number of spatial nodes
    pub fn nodes(&self) -> usize {
        self.x.len()
    }

    /// Number of time points
    pub fn steps(&self) -> usize {
        self.t.len()
    }

    /// Final time t_{nt-1}
    pub fn final_time(&self) -> f64 {
        self.t.iter().last().copied().unwrap_or(0.0)
    }

    /// Whether `r ≤ 0.5`
    pub fn is_stable(&self) -> bool {
        self.r <= STABILITY_LIMIT
    }
}

// =================================================================================================
// Tests
// =================================================================================================

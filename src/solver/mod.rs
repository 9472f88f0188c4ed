//! Numerical solvers
//!
//! This module turns a [`Scenario`] (WHAT to solve) and a
//! [`SolverConfiguration`] (on which grid) into the temperature history and
//! its error against the closed form.
//!
//! # Phases
//!
//! ```text
//! ┌──────────────────────┐
//! │ SolverConfiguration  │  nt, nx, α, L, tmax
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ Discretization       │  dx, dt, r, 1-2r, x, t          (mesh)
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ Initial + Dirichlet  │  column 0, edge rows             (boundary)
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ FTCS recurrence      │  column j from column j-1        (methods)
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ Error evaluation     │  ‖U(:,nt-1) - u_e‖₂              (accuracy)
//! └──────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`traits`**: `SolverConfiguration`, `Solver`, `SimulationResult`
//! - **`mesh`**: `Discretization`
//! - **`boundary`**: `DirichletBoundaries`
//! - **`scenario`**: `Scenario` (model + boundaries)
//! - **`methods`**: `FtcsSolver` (dense history), `FtcsStepper` (streaming)
//! - **`accuracy`**: exact profile, pointwise and L2 error, refinement study
//!
//! # Quick Start Example
//!
//! ```rust
//! use heat_rs::solver::{FtcsSolver, Scenario, Solver, SolverConfiguration};
//!
//! let scenario = Scenario::default();
//! let config = SolverConfiguration::default().with_steps(100);
//!
//! let result = FtcsSolver::new().solve(&scenario, &config).unwrap();
//! println!("error = {:.3e}", result.error.unwrap());
//! ```
//!
//! # Error Handling
//!
//! Solvers return `Result<T, String>`. Only inputs for which the grid is
//! undefined are rejected (`nx < 3`, `nt < 2`, non-positive `L` or `tmax`,
//! negative α, non-finite boundaries). An unstable ratio is accepted and
//! reported through `log::warn!`; the diverging field is returned as is.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod boundary;
mod scenario;
pub mod mesh;
pub mod methods;
pub mod accuracy;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Whether a column sweep is handed to Rayon depends on the number of interior
// nodes. The value lives in an AtomicUsize so that benchmarks and tests can
// change it at runtime; Relaxed ordering is enough for a performance hint.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of interior nodes from which a column sweep runs in parallel.
///
/// Each node costs three multiply-adds; below a few thousand nodes Rayon's
/// dispatch overhead dominates.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Column sweeps with fewer interior nodes than this value run sequentially.
/// Larger sweeps use Rayon, but only when the crate is compiled with the
/// `parallel` feature.
///
/// # Example
///
/// ```rust
/// use heat_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use heat_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds.
///
/// ```rust,ignore
/// let _guard = crate::solver::ThresholdGuard::save(50);
/// // threshold is now 50 …
/// // … and is automatically restored when _guard is dropped.
/// ```
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    SimulationResult,
    Solver,
    SolverConfiguration,
    DEFAULT_DIFFUSIVITY,
    DEFAULT_HORIZON,
    DEFAULT_LENGTH,
    DEFAULT_NODES,
    DEFAULT_STEPS,
    STABILITY_LIMIT,
};

pub use boundary::DirichletBoundaries;
pub use scenario::Scenario;
pub use mesh::Discretization;

pub use methods::{FieldSnapshot, FtcsSolver, FtcsStepper};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Log a warning when the stability ratio exceeds 0.5
///
/// Returns whether a warning was emitted. The run is never stopped.
pub(crate) fn warn_if_unstable(ratio: f64) -> bool {
    if ratio > STABILITY_LIMIT {
        log::warn!(
            "Stability ratio r = {ratio:.4} exceeds {STABILITY_LIMIT}: FTCS will amplify \
             high-frequency modes. Increase the number of time points or reduce the number of nodes."
        );
        true
    } else {
        false
    }
}

/// Log a warning when a column contains NaN or Inf
///
/// Returns whether a warning was emitted.
pub(crate) fn warn_if_not_finite(column: &[f64], step: usize) -> bool {
    if let Some(i) = column.iter().position(|u| !u.is_finite()) {
        log::warn!(
            "Non-finite temperature {} at node {i}, step {step}. \
             This indicates numerical instability.",
            column[i]
        );
        true
    } else {
        false
    }
}

// =================================================================================================
// Tests
// =================================================================================================

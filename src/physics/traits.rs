//! Heat problem trait
//!
//! This module defines the core API for heat problems:
//! - `HeatModel`: initial profile, Dirichlet constants and (optional) closed form
//!
//! The solver never hardcodes the initial condition or the reference
//! solution; both are provided here and consumed by `solver::methods` and
//! `solver::accuracy` respectively.

// =================================================================================================
// Heat Model Trait
// =================================================================================================

/// Trait for 1D heat problems on `[0, L]` with Dirichlet boundaries
///
/// # Responsibility
/// Describes WHAT is diffusing: the temperature profile at `t = 0`, the two
/// fixed edge temperatures and, when one is known, the analytical solution.
/// Does NOT advance anything in time (that's the Solver's job).
///
/// # Consistency
///
/// `initial_value(0, L)` and `initial_value(L, L)` should agree with
/// `boundary_values()`. The solver always imposes the boundary constants on
/// the edge nodes, so a mismatch only affects the first column.
///
/// An `exact_solution` must solve the heat equation for *this* initial
/// profile and *these* boundary constants. It must not be reused when either
/// one changes.
pub trait HeatModel: Send + Sync {

    /// Temperature at position `x` for `t = 0`
    ///
    /// # Arguments
    /// * `x` - Position in `[0, length]`
    /// * `length` - Domain length `L`
    fn initial_value(&self, x: f64, length: f64) -> f64;

    /// Dirichlet constants `(u(0, t), u(L, t))`
    ///
    /// Defaults to homogeneous boundaries.
    fn boundary_values(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Closed-form temperature at `(x, t)`, if one exists
    ///
    /// Returns `None` for problems without a known solution; error
    /// evaluation is then skipped.
    fn exact_solution(&self, _x: f64, _t: f64, _diffusivity: f64, _length: f64) -> Option<f64> {
        None
    }

    /// Whether `exact_solution` is implemented
    ///
    /// Models overriding `exact_solution` should return `true` here.
    fn has_closed_form(&self) -> bool {
        false
    }

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================

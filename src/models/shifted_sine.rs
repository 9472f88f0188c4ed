//! Sine mode on top of a linear steady state
//!
//! Non-homogeneous Dirichlet problem with a closed-form solution:
//!
//! ```text
//! u(0, t) = u0,   u(L, t) = uL
//! u(x, 0) = u0 + (uL - u0)·x/L + A·sin(πx/L)
//! u(x, t) = u0 + (uL - u0)·x/L + A·sin(πx/L)·exp(-α(π/L)²t)
//! ```
//!
//! The linear part is the steady state and is reproduced exactly by the
//! three-point stencil; only the sine part carries discretization error.

use std::f64::consts::PI;

use crate::physics::HeatModel;

/// Linear steady profile between `u0` and `uL` plus a decaying sine bump
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiftedSine {
    /// Temperature at x = 0
    left: f64,
    /// Temperature at x = L
    right: f64,
    /// Amplitude of the transient sine component
    amplitude: f64,
}

impl ShiftedSine {
    /// Create a shifted sine problem
    ///
    /// # Arguments
    ///
    /// * `left` - Fixed temperature `u0` at `x = 0`
    /// * `right` - Fixed temperature `uL` at `x = L`
    /// * `amplitude` - Peak of the transient sine component
    pub fn new(left: f64, right: f64, amplitude: f64) -> Self {
        assert!(
            left.is_finite() && right.is_finite() && amplitude.is_finite(),
            "Boundary temperatures and amplitude must be finite"
        );
        Self { left, right, amplitude }
    }

    #[inline]
    fn steady(&self, x: f64, length: f64) -> f64 {
        self.left + (self.right - self.left) * x / length
    }
}

impl HeatModel for ShiftedSine {
    fn initial_value(&self, x: f64, length: f64) -> f64 {
        self.steady(x, length) + self.amplitude * (PI * x / length).sin()
    }

    fn boundary_values(&self) -> (f64, f64) {
        (self.left, self.right)
    }

    fn exact_solution(&self, x: f64, t: f64, diffusivity: f64, length: f64) -> Option<f64> {
        let decay = (-t * diffusivity * (PI / length).powi(2)).exp();
        Some(self.steady(x, length) + self.amplitude * (PI * x / length).sin() * decay)
    }

    fn has_closed_form(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "Shifted Sine"
    }

    fn description(&self) -> Option<&str> {
        Some("linear steady state between u0 and uL plus A sin(pi x / L)")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        let model = ShiftedSine::new(1.0, 3.0, 0.5);
        assert_eq!(model.boundary_values(), (1.0, 3.0));
    }

    #[test]
    fn test_initial_profile_matches_boundaries() {
        let model = ShiftedSine::new(1.0, 3.0, 0.5);
        assert_eq!(model.initial_value(0.0, 2.0), 1.0);
        assert!((model.initial_value(2.0, 2.0) - 3.0).abs() < 1e-14);
    }

    #[test]
    fn test_relaxes_to_linear_steady_state() {
        let model = ShiftedSine::new(1.0, 3.0, 0.5);
        let late = model.exact_solution(1.0, 1.0e4, 0.1, 2.0).unwrap();
        assert!((late - 2.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "must be finite")]
    fn test_invalid_boundary() {
        ShiftedSine::new(f64::INFINITY, 0.0, 1.0);
    }
}

//! Single sine mode with homogeneous boundaries
//!
//! The reference problem of the FTCS kernel:
//!
//! ```text
//! u(x, 0) = A·sin(πx/L),   u(0, t) = u(L, t) = 0
//! u(x, t) = A·sin(πx/L)·exp(-α(π/L)²t)
//! ```
//!
//! # Example
//!
//! ```rust
//! use heat_rs::models::SineProfile;
//! use heat_rs::physics::HeatModel;
//!
//! let model = SineProfile::default();
//! assert!((model.initial_value(0.5, 1.0) - 1.0).abs() < 1e-15);
//! ```

use std::f64::consts::PI;

use crate::physics::HeatModel;

/// Fundamental sine mode `A·sin(πx/L)` between two zero-temperature edges
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineProfile {
    /// Peak temperature A at `t = 0`
    amplitude: f64,
}

impl SineProfile {
    /// Create a sine profile with a given peak temperature
    pub fn new(amplitude: f64) -> Self {
        assert!(
            amplitude.is_finite(),
            "Amplitude must be finite, got {}",
            amplitude
        );
        Self { amplitude }
    }

    /// Peak temperature at `t = 0`
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl Default for SineProfile {
    fn default() -> Self {
        Self { amplitude: 1.0 }
    }
}

impl HeatModel for SineProfile {
    fn initial_value(&self, x: f64, length: f64) -> f64 {
        self.amplitude * (PI * x / length).sin()
    }

    fn exact_solution(&self, x: f64, t: f64, diffusivity: f64, length: f64) -> Option<f64> {
        let decay = (-t * diffusivity * (PI / length).powi(2)).exp();
        Some(self.initial_value(x, length) * decay)
    }

    fn has_closed_form(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "Sine Profile"
    }

    fn description(&self) -> Option<&str> {
        Some("u(x,0) = A sin(pi x / L), zero Dirichlet boundaries")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_amplitude() {
        assert_eq!(SineProfile::default().amplitude(), 1.0);
    }

    #[test]
    fn test_initial_profile_peaks_mid_domain() {
        let model = SineProfile::new(2.0);
        assert!((model.initial_value(1.0, 2.0) - 2.0).abs() < 1e-14);
        assert_eq!(model.initial_value(0.0, 2.0), 0.0);
    }

    #[test]
    fn test_exact_solution_at_t_zero_is_initial_profile() {
        let model = SineProfile::default();
        for &x in &[0.1, 0.25, 0.5, 0.9] {
            let exact = model.exact_solution(x, 0.0, 0.1, 1.0).unwrap();
            assert_eq!(exact, model.initial_value(x, 1.0));
        }
    }

    #[test]
    fn test_exact_solution_decay_rate() {
        // alpha·(π/L)²·t = 0.1·π²·0.5
        let model = SineProfile::default();
        let exact = model.exact_solution(0.5, 0.5, 0.1, 1.0).unwrap();
        let expected = (-0.05 * PI * PI).exp();
        assert!((exact - expected).abs() < 1e-14);
    }

    #[test]
    fn test_zero_diffusivity_freezes_exact_solution() {
        let model = SineProfile::default();
        let exact = model.exact_solution(0.3, 100.0, 0.0, 1.0).unwrap();
        assert_eq!(exact, model.initial_value(0.3, 1.0));
    }

    #[test]
    #[should_panic(expected = "Amplitude must be finite")]
    fn test_invalid_amplitude() {
        SineProfile::new(f64::NAN);
    }
}

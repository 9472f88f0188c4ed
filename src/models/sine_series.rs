//! Finite sine series with homogeneous boundaries
//!
//! Superposition of the eigenmodes of the Dirichlet Laplacian on `[0, L]`:
//!
//! ```text
//! u(x, 0) = Σ_k b_k·sin(kπx/L)
//! u(x, t) = Σ_k b_k·sin(kπx/L)·exp(-α(kπ/L)²t)
//! ```
//!
//! Higher modes decay faster and are resolved less accurately by FTCS, which
//! makes this model a harder test than [`SineProfile`](super::SineProfile).

use std::f64::consts::PI;

use crate::physics::HeatModel;

/// Sum of sine modes `b_k·sin(kπx/L)`, `k = 1, 2, ...`
#[derive(Clone, Debug, PartialEq)]
pub struct SineSeries {
    /// Coefficients b_1, b_2, ... (index 0 is mode 1)
    coefficients: Vec<f64>,
}

impl SineSeries {
    /// Create a series from its mode coefficients
    ///
    /// `coefficients[0]` multiplies `sin(πx/L)`, `coefficients[1]` multiplies
    /// `sin(2πx/L)` and so on.
    ///
    /// # Example
    ///
    /// ```rust
    /// use heat_rs::models::SineSeries;
    ///
    /// // sin(πx) + 0.5·sin(3πx)
    /// let model = SineSeries::new(vec![1.0, 0.0, 0.5]);
    /// assert_eq!(model.modes(), 3);
    /// ```
    pub fn new(coefficients: Vec<f64>) -> Self {
        assert!(
            !coefficients.is_empty(),
            "Need at least one sine mode"
        );
        assert!(
            coefficients.iter().all(|b| b.is_finite()),
            "Mode coefficients must be finite"
        );
        Self { coefficients }
    }

    /// Number of modes in the series
    pub fn modes(&self) -> usize {
        self.coefficients.len()
    }

    /// Mode coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[inline]
    fn wavenumber(mode: usize, length: f64) -> f64 {
        mode as f64 * PI / length
    }
}

impl HeatModel for SineSeries {
    fn initial_value(&self, x: f64, length: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(k, b)| b * (Self::wavenumber(k + 1, length) * x).sin())
            .sum()
    }

    fn exact_solution(&self, x: f64, t: f64, diffusivity: f64, length: f64) -> Option<f64> {
        let value = self.coefficients
            .iter()
            .enumerate()
            .map(|(k, b)| {
                let kappa = Self::wavenumber(k + 1, length);
                b * (kappa * x).sin() * (-diffusivity * kappa * kappa * t).exp()
            })
            .sum();
        Some(value)
    }

    fn has_closed_form(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "Sine Series"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SineProfile;

    #[test]
    fn test_single_mode_matches_sine_profile() {
        let series = SineSeries::new(vec![1.0]);
        let sine = SineProfile::default();

        for &x in &[0.0, 0.2, 0.5, 0.7] {
            assert!((series.initial_value(x, 1.0) - sine.initial_value(x, 1.0)).abs() < 1e-15);
            let a = series.exact_solution(x, 0.3, 0.1, 1.0).unwrap();
            let b = sine.exact_solution(x, 0.3, 0.1, 1.0).unwrap();
            assert!((a - b).abs() < 1e-15);
        }
    }

    #[test]
    fn test_higher_modes_decay_faster() {
        let mode1 = SineSeries::new(vec![1.0]);
        let mode3 = SineSeries::new(vec![0.0, 0.0, 1.0]);

        // Compare at the respective peaks of each mode
        let ratio1 = mode1.exact_solution(0.5, 0.2, 0.1, 1.0).unwrap();
        let ratio3 = mode3.exact_solution(0.5 / 3.0, 0.2, 0.1, 1.0).unwrap();

        assert!(ratio3 < ratio1);
    }

    #[test]
    fn test_zero_at_edges() {
        let model = SineSeries::new(vec![1.0, -0.3, 0.2]);
        assert_eq!(model.initial_value(0.0, 2.0), 0.0);
        assert!(model.initial_value(2.0, 2.0).abs() < 1e-14);
    }

    #[test]
    #[should_panic(expected = "Need at least one sine mode")]
    fn test_empty_series() {
        SineSeries::new(vec![]);
    }
}

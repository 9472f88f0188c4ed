//! Mock heat models for integration testing

use heat_rs::physics::HeatModel;

/// Gaussian bump with zero edges and no closed form
pub struct GaussianBump {
    pub center: f64,
    pub width: f64,
}

impl GaussianBump {
    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }
}

impl HeatModel for GaussianBump {
    fn initial_value(&self, x: f64, length: f64) -> f64 {
        let z = x / length - self.center;
        (-z * z / (2.0 * self.width * self.width)).exp()
    }

    fn name(&self) -> &str {
        "Gaussian Bump"
    }
}

/// Constant temperature everywhere, edges included
///
/// A fixed point of the scheme for any ratio.
pub struct Uniform(pub f64);

impl HeatModel for Uniform {
    fn initial_value(&self, _x: f64, _length: f64) -> f64 {
        self.0
    }

    fn boundary_values(&self) -> (f64, f64) {
        (self.0, self.0)
    }

    fn exact_solution(&self, _x: f64, _t: f64, _diffusivity: f64, _length: f64) -> Option<f64> {
        Some(self.0)
    }

    fn has_closed_form(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "Uniform"
    }
}

//! Dirichlet boundary rows
//!
//! The two edge nodes of every time column hold fixed temperatures. They are
//! written once per column, before or after the interior sweep, and are never
//! touched by the stencil.

use std::fmt;

use crate::physics::HeatModel;

// =================================================================================================
// Dirichlet Boundaries
// =================================================================================================

/// Fixed edge temperatures `u(0, t) = left`, `u(L, t) = right`
///
/// # Examples
///
/// ```rust
/// use heat_rs::solver::DirichletBoundaries;
///
/// let mut column = vec![9.0; 5];
/// DirichletBoundaries::new(1.0, 2.0).apply(&mut column);
/// assert_eq!(column, vec![1.0, 9.0, 9.0, 9.0, 2.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirichletBoundaries {
    /// Temperature at x = 0
    pub left: f64,

    /// Temperature at x = L
    pub right: f64,
}

impl DirichletBoundaries {
    /// Create boundaries from two constants
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Homogeneous boundaries `u = 0` on both edges
    pub fn homogeneous() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Boundaries declared by a model
    pub fn from_model(model: &dyn HeatModel) -> Self {
        let (left, right) = model.boundary_values();
        Self::new(left, right)
    }

    /// Overwrite the first and last entries of a column
    ///
    /// Does nothing on an empty column.
    pub fn apply(&self, column: &mut [f64]) {
        if let Some(first) = column.first_mut() {
            *first = self.left;
        }
        if let Some(last) = column.last_mut() {
            *last = self.right;
        }
    }

    /// Verifying that both constants are finite
    pub fn validate(&self) -> Result<(), String> {
        if !self.left.is_finite() || !self.right.is_finite() {
            return Err(format!(
                "Boundary values must be finite, got ({}, {})",
                self.left, self.right
            ));
        }
        Ok(())
    }
}

impl Default for DirichletBoundaries {
    fn default() -> Self {
        Self::homogeneous()
    }
}

impl fmt::Display for DirichletBoundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u(0) = {}, u(L) = {}", self.left, self.right)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftedSine;

    #[test]
    fn test_default_is_homogeneous() {
        assert_eq!(DirichletBoundaries::default(), DirichletBoundaries::new(0.0, 0.0));
    }

    #[test]
    fn test_apply_only_touches_edges() {
        let mut column = vec![5.0, 5.0, 5.0];
        DirichletBoundaries::new(-1.0, 1.0).apply(&mut column);
        assert_eq!(column, vec![-1.0, 5.0, 1.0]);
    }

    #[test]
    fn test_apply_on_empty_column() {
        let mut column: Vec<f64> = vec![];
        DirichletBoundaries::new(1.0, 2.0).apply(&mut column);
        assert!(column.is_empty());
    }

    #[test]
    fn test_from_model() {
        let model = ShiftedSine::new(0.5, 2.0, 1.0);
        let boundaries = DirichletBoundaries::from_model(&model);
        assert_eq!(boundaries.left, 0.5);
        assert_eq!(boundaries.right, 2.0);
    }

    #[test]
    fn test_validate() {
        assert!(DirichletBoundaries::new(0.0, 1.0).validate().is_ok());
        assert!(DirichletBoundaries::new(f64::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn test_display() {
        let text = DirichletBoundaries::new(0.0, 1.5).to_string();
        assert_eq!(text, "u(0) = 0, u(L) = 1.5");
    }
}

//! Simulation scenario definition
//!
//! A scenario combines a heat model with its Dirichlet boundaries.
use crate::models::SineProfile;
use crate::physics::HeatModel;
use crate::solver::boundary::DirichletBoundaries;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Heat model (initial profile, closed form)
/// - Dirichlet boundaries (taken from the model)
///
/// Both are fixed at construction; the boundaries always match the model.
///
/// # Design
///
/// The same scenario can be solved with the dense solver and replayed with
/// the streaming stepper. This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use heat_rs::models::ShiftedSine;
/// use heat_rs::solver::Scenario;
///
/// let scenario = Scenario::new(Box::new(ShiftedSine::new(1.0, 2.0, 0.5)));
/// assert_eq!(scenario.boundaries().left, 1.0);
/// ```
pub struct Scenario {
    /// Heat model (problem data)
    model: Box<dyn HeatModel>,

    /// Edge temperatures
    boundaries: DirichletBoundaries,
}

impl Scenario {

    /// Create a scenario, boundaries are read from the model
    pub fn new(model: Box<dyn HeatModel>) -> Self {
        let boundaries = DirichletBoundaries::from_model(model.as_ref());
        Self { model, boundaries }
    }

    /// Verifying scenario content (mainly boundaries)
    pub fn validate(&self) -> Result<(), String> {
        self.boundaries.validate()
    }

    /// Heat model
    pub fn model(&self) -> &dyn HeatModel {
        self.model.as_ref()
    }

    /// Dirichlet constants read from the model
    pub fn boundaries(&self) -> &DirichletBoundaries {
        &self.boundaries
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }

    /// Whether the model provides a closed-form reference
    pub fn has_exact_solution(&self) -> bool {
        self.model.has_closed_form()
    }
}

impl Default for Scenario {
    /// The `sin(πx/L)` problem with zero boundaries
    fn default() -> Self {
        Self::new(Box::new(SineProfile::default()))
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
        .field("name", &self.get_model_name())
        .field("boundaries", &self.boundaries)
        .field("has exact solution", &self.has_exact_solution())
        .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

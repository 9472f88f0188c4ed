//! Error evaluation against closed-form solutions
//!
//! Phase 4 of a run. The computed profile at the final time is compared
//! node by node with the model's analytical solution, and the discrepancy is
//! summarized by its Euclidean norm
//!
//! ```text
//! e = ‖U(:, nt-1) - u_e(x, t_{nt-1})‖₂
//! ```
//!
//! The reference is pinned to the Dirichlet constants on the two edge nodes.
//! Analytically the closed forms already take those values there; pinning
//! only removes the rounding residue of expressions such as `sin(π)`.

use nalgebra::DVector;

use crate::solver::{FtcsSolver, Scenario, Solver, SolverConfiguration};

/// Largest number of time intervals a refinement level may ask for
const MAX_TIME_INTERVALS: f64 = u32::MAX as f64;

/// Analytical profile at time `t` on the nodes `x`
///
/// Returns `None` when the model has no closed form.
pub fn exact_profile(
    scenario: &Scenario,
    x: &DVector<f64>,
    t: f64,
    diffusivity: f64,
    length: f64,
) -> Option<DVector<f64>> {
    let mut values = Vec::with_capacity(x.len());
    for &xi in x.iter() {
        values.push(scenario.model().exact_solution(xi, t, diffusivity, length)?);
    }
    scenario.boundaries().apply(&mut values);
    Some(DVector::from_vec(values))
}

/// Pointwise difference `computed - exact`
///
/// Returns `None` when the model has no closed form or the lengths differ.
pub fn pointwise_error(
    scenario: &Scenario,
    x: &DVector<f64>,
    computed: &[f64],
    t: f64,
    diffusivity: f64,
    length: f64,
) -> Option<DVector<f64>> {
    if computed.len() != x.len() {
        return None;
    }
    let exact = exact_profile(scenario, x, t, diffusivity, length)?;
    Some(DVector::from_iterator(
        computed.len(),
        computed.iter().zip(exact.iter()).map(|(u, ue)| u - ue),
    ))
}

/// Euclidean norm of [`pointwise_error`]
pub fn l2_error(
    scenario: &Scenario,
    x: &DVector<f64>,
    computed: &[f64],
    t: f64,
    diffusivity: f64,
    length: f64,
) -> Option<f64> {
    pointwise_error(scenario, x, computed, t, diffusivity, length).map(|e| e.norm())
}

// =================================================================================================
// Refinement study
// =================================================================================================

/// One level of a refinement study
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefinementLevel {
    /// Number of intervals nx - 1
    pub intervals: usize,

    /// Spatial nodes nx
    pub nodes: usize,

    /// Time points nt
    pub steps: usize,

    /// Stability ratio actually used
    pub ratio: f64,

    /// L2 error at the final time
    pub error: f64,
}

/// Solve on successively finer meshes with (nearly) constant r
///
/// For each entry of `intervals`, the spatial mesh gets that many intervals
/// and the number of time steps is chosen so that `α·dt/dx²` stays as close
/// as possible to `target_ratio` without exceeding it. Diffusivity, length
/// and horizon come from `base`.
///
/// # Errors
///
/// - the scenario has no closed form
/// - `target_ratio` is not positive
/// - a level needs more than `u32::MAX` time steps
/// - any level fails validation
///
/// # Example
///
/// ```rust
/// use heat_rs::solver::{accuracy, Scenario, SolverConfiguration};
///
/// let levels = accuracy::refine_fixed_ratio(
///     &Scenario::default(),
///     &SolverConfiguration::default(),
///     0.25,
///     &[10, 20, 40],
/// ).unwrap();
///
/// assert!(levels[2].error < levels[0].error);
/// ```
pub fn refine_fixed_ratio(
    scenario: &Scenario,
    base: &SolverConfiguration,
    target_ratio: f64,
    intervals: &[usize],
) -> Result<Vec<RefinementLevel>, String> {
    if !(target_ratio > 0.0) {
        return Err(format!("Target ratio must be positive, got {}", target_ratio));
    }
    if !scenario.has_exact_solution() {
        return Err(format!(
            "Model {} has no closed form, cannot measure error",
            scenario.get_model_name()
        ));
    }

    let solver = FtcsSolver::new();
    let mut levels = Vec::with_capacity(intervals.len());

    for &m in intervals {
        let dx = base.length / m as f64;
        // nt - 1 ≥ α·tmax / (r·dx²)
        let required = (base.diffusivity * base.horizon / (target_ratio * dx * dx))
            .ceil()
            .max(1.0);
        if !(required <= MAX_TIME_INTERVALS) {
            return Err(format!(
                "Too many time steps for {} intervals at r = {:e}: {:e}",
                m, target_ratio, required
            ));
        }
        let time_intervals = required as usize;

        let config = base
            .clone()
            .with_nodes(m + 1)
            .with_steps(time_intervals + 1);

        let result = solver.solve(scenario, &config)?;
        let error = result
            .error
            .ok_or_else(|| "Missing error for a model with closed form".to_string())?;

        levels.push(RefinementLevel {
            intervals: m,
            nodes: config.nodes,
            steps: config.steps,
            ratio: result.ratio,
            error,
        });
    }

    Ok(levels)
}

// =================================================================================================
// Tests
// =================================================================================================

//! Heat problems with known analytical solutions
//!
//! All models implement the [`HeatModel`](crate::physics::HeatModel) trait.
//! The solver reads `initial_value` once to seed column 0 and
//! `boundary_values` to pin the edge rows; `exact_solution` is only used by
//! the error evaluation in [`crate::solver::accuracy`].
//!
//! # Available Models
//!
//! ## [`SineProfile`]: the default problem
//!
//! `sin(πx/L)` between two zero-temperature edges. This is what
//! [`crate::driver::heat_ftcs`] solves.
//!
//! ## [`SineSeries`]: several modes
//!
//! A finite Fourier sine series. Each mode decays with its own rate,
//! which exposes the wavenumber-dependent error of the scheme.
//!
//! ## [`ShiftedSine`]: non-zero boundaries
//!
//! A sine bump relaxing towards the linear profile between `u0` and `uL`.
//! Exercises the boundary rows with non-zero constants.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod sine;
pub mod sine_series;
pub mod shifted_sine;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use sine::SineProfile;
pub use sine_series::SineSeries;
pub use shifted_sine::ShiftedSine;

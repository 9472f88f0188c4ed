//! heat-rs: 1D Heat Equation with the FTCS Scheme
//!
//! Solves `u_t = α u_xx` on `[0, L] × [0, tmax]` with constant Dirichlet
//! boundaries, using the explicit Forward-Time Centered-Space scheme, and
//! measures the result against the closed-form solution.
//!
//! # Architecture
//!
//! heat-rs keeps two things apart:
//!
//! 1. **Problem definition** (what to solve)
//!    - initial profile, boundary constants, closed form: [`physics::HeatModel`]
//!    - ready-made problems in [`models`]
//!
//! 2. **Numerics** (how to solve)
//!    - mesh, FTCS recurrence, error evaluation: [`solver`]
//!
//! Presentation ([`output`]) only reads finished results.
//!
//! # Quick Start
//!
//! ```rust
//! use heat_rs::solver::{FtcsSolver, Scenario, Solver, SolverConfiguration};
//! use heat_rs::models::SineProfile;
//!
//! # fn main() -> Result<(), String> {
//! // 1. Problem: u(x, 0) = sin(πx/L), u(0) = u(L) = 0
//! let scenario = Scenario::new(Box::new(SineProfile::default()));
//!
//! // 2. Grid: 200 time points, 20 nodes, α = 0.1, L = 1, tmax = 0.5
//! let config = SolverConfiguration::new(200, 20, 0.1, 1.0, 0.5);
//! assert!(config.is_stable());
//!
//! // 3. Run
//! let result = FtcsSolver::new().solve(&scenario, &config)?;
//!
//! // 4. Inspect
//! println!("L2 error at t = {}: {:.3e}", result.final_time(), result.error.unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! For the default problem in one call, see [`driver::heat_ftcs`].
//!
//! # Modules
//!
//! - [`physics`]: the `HeatModel` trait
//! - [`models`]: sine, sine series, shifted sine
//! - [`solver`]: configuration, mesh, FTCS solver and stepper, accuracy
//! - [`output`]: console report, plots, CSV export
//! - [`driver`]: single-call entry point
//!
//! # Features
//!
//! - `parallel` (default): Rayon sweep of large columns

// Core modules
pub mod physics;

pub mod models;
pub mod solver;

pub mod output;
pub mod driver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use heat_rs::prelude::*;
    //! ```
    pub use crate::physics::HeatModel;
    pub use crate::models::{ShiftedSine, SineProfile, SineSeries};
    pub use crate::solver::{Solver,
                            SolverConfiguration,
                            Scenario,
                            SimulationResult,
                            DirichletBoundaries,
                            FtcsSolver,
                            FtcsStepper};
    pub use crate::driver::heat_ftcs;
}

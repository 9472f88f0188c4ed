//! Visualization of heat-equation results
//!
//! This module provides tools to visualize simulation results using the `plotters` library.
//! The backend follows the file extension: `.svg` writes SVG, anything else a bitmap.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profile**: Computed vs exact profile, profile evolution
//! - **residual**: Pointwise error `u − u_e`
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use heat_rs::output::visualization::{plot_error, plot_solution, PlotConfig};
//!
//! plot_solution(&x, &u, (&x_fine, &u_exact), "ftcs_solution.png", None)?;
//! plot_error(&x, &e, "ftcs_error.png", Some(&PlotConfig::error("t = 0.5")))?;
//! ```
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | FTCS markers vs exact curve | `profile` | `plot_solution` |
//! | Several labelled profiles | `profile` | `plot_profile_comparison` |
//! | Snapshots of the history | `profile` | `plot_profile_evolution` |
//! | Pointwise error | `residual` | `plot_error` |

pub mod config;
pub mod profile;
pub mod residual;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use profile::{plot_profile_comparison, plot_profile_evolution, plot_solution};

pub use residual::plot_error;

//! Output module for simulation results
//!
//! Everything here consumes a finished [`SimulationResult`](crate::solver::SimulationResult);
//! nothing feeds back into the numerics.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── report.rs           ← Two-line console summary
//! ├── visualization/      ← Plots (plotters)
//! │   ├── config.rs
//! │   ├── profile.rs
//! │   └── residual.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use heat_rs::output::{export_comparison_csv, plot_solution, print_report};
//!
//! print_report(&result);
//! plot_solution(&x, &u, (&x, &u_exact), "ftcs_solution.png", None)?;
//! export_comparison_csv(&x, &u, &u_exact, "final.csv", None)?;
//! ```
//!
//! Plotting and export accept plain `&[f64]` slices.

pub mod report;
pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use report::{format_report, print_report};

pub use visualization::{
    plot_error,
    plot_profile_comparison,
    plot_profile_evolution,
    plot_solution,
    PlotConfig,
};

pub use export::{
    export_comparison_csv,
    export_history_csv,
    CsvConfig,
    CsvExporter,
    Exporter,
};

//! Export of simulation results to files.
//!
//! # Architecture
//!
//! The [`Exporter`] trait abstracts the file format. Each format lives in its
//! own sub-module; adding one means adding a file.
//!
//! # Available formats
//!
//! | Format  | Module   |
//! |---------|----------|
//! | CSV     | [`csv`]  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use heat_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Whole history
//! exporter.export_history(&result, None, "history.csv")?;
//!
//! // Five evenly spaced snapshots
//! exporter.export_history(&result, Some(5), "history_light.csv")?;
//!
//! // Final profile against the closed form
//! exporter.export_comparison(x, u, u_exact, "final.csv")?;
//! ```

pub mod csv;

pub use csv::{
    export_comparison_csv,
    export_history_csv,
    export_profile_csv,
    CsvConfig,
    CsvError,
    CsvExporter,
    CsvMetadata,
};

use crate::solver::SimulationResult;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format reports its own error type, so callers can match on it
/// instead of downcasting a `Box<dyn Error>`.
///
/// # Parameter `n_points`
///
/// - `None`: exports every stored time
/// - `Some(n)`: keeps `n` evenly spaced times, first and last always included
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports the temperature history, one column per stored time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `result` contains no data or non-finite values
    fn export_history(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error>;

    /// Exports a computed profile next to the exact one and their difference.
    ///
    /// # Errors
    ///
    /// Returns an error if the three slices differ in length, contain
    /// non-finite values, or the file cannot be written.
    fn export_comparison(
        &self,
        x: &[f64],
        computed: &[f64],
        exact: &[f64],
        path: &str,
    ) -> Result<(), Self::Error>;
}

//! CSV export of heat-equation results
//!
//! Files are readable by pandas, MATLAB, gnuplot and spreadsheets.
//!
//! # Layouts
//!
//! ## Field history
//!
//! One row per node, one column per stored time:
//!
//! ```csv
//! x,t=0.000000,t=0.055556,...
//! 0.000000,0.000000,0.000000,...
//! 0.052632,0.164595,0.143318,...
//! ```
//!
//! ## Final comparison
//!
//! ```csv
//! x,u,u_exact,u-u_exact
//! 0.000000,0.000000,0.000000,0.000000
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```csv
//! # Heat Equation Simulation Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Model: Sine Profile
//! # Solver: FTCS
//! # Diffusivity: 0.1
//! # Length: 1
//! # Horizon: 0.5
//! # Nodes: 20
//! # Time Steps: 10
//! # Stability Ratio: 2.005556
//! # L2 Error: 2.403698e-2
//! #
//! x,u,u_exact,u-u_exact
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use crate::solver::SimulationResult;
use super::Exporter;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while writing CSV files
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("empty data: {0} must not be empty")]
    Empty(&'static str),

    #[error("length mismatch: {column} has {found} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid data: NaN or Inf in column {0}")]
    NonFinite(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header for the position column (default: "x")
    pub position_header: String,

    /// Header for the temperature column (default: "u")
    pub value_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            position_header: "x".to_string(),
            value_header: "u".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set appear in the header.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    pub model_name: Option<String>,
    pub solver_name: Option<String>,
    pub diffusivity: Option<f64>,
    pub length: Option<f64>,
    pub horizon: Option<f64>,
    pub nodes: Option<usize>,
    pub time_steps: Option<usize>,
    pub stability_ratio: Option<f64>,
    pub l2_error: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Collect metadata from a finished run
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = CsvConfig::default().with_metadata(CsvMetadata::from_result(&result));
    /// ```
    pub fn from_result(result: &SimulationResult) -> Self {
        let number = |key: &str| result.get_metadata(key).and_then(|v| v.parse::<f64>().ok());

        Self {
            model_name: result.get_metadata("model").map(str::to_string),
            solver_name: result.get_metadata("solver").map(str::to_string),
            diffusivity: number("diffusivity"),
            length: number("length"),
            horizon: number("horizon"),
            nodes: Some(result.nodes()),
            time_steps: Some(result.len()),
            stability_ratio: Some(result.ratio),
            l2_error: result.error,
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# Heat Equation Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(alpha) = metadata.diffusivity {
        writeln!(out, "# Diffusivity: {}", alpha)?;
    }
    if let Some(length) = metadata.length {
        writeln!(out, "# Length: {}", length)?;
    }
    if let Some(horizon) = metadata.horizon {
        writeln!(out, "# Horizon: {}", horizon)?;
    }
    if let Some(nodes) = metadata.nodes {
        writeln!(out, "# Nodes: {}", nodes)?;
    }
    if let Some(steps) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", steps)?;
    }
    if let Some(r) = metadata.stability_ratio {
        writeln!(out, "# Stability Ratio: {:.6}", r)?;
    }
    if let Some(e) = metadata.l2_error {
        writeln!(out, "# L2 Error: {:e}", e)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")
}

fn write_preamble<W: Write>(out: &mut W, config: &CsvConfig) -> std::io::Result<()> {
    if config.include_metadata
        && let Some(metadata) = &config.metadata {
            write_metadata_header(out, metadata)?;
        }
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn check_column(name: &str, values: &[f64], expected: usize) -> Result<(), CsvError> {
    if values.len() != expected {
        return Err(CsvError::LengthMismatch {
            column: name.to_string(),
            expected,
            found: values.len(),
        });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(CsvError::NonFinite(name.to_string()));
    }
    Ok(())
}

fn write_rows<W: Write>(
    out: &mut W,
    columns: &[&[f64]],
    config: &CsvConfig,
) -> std::io::Result<()> {
    let rows = columns.first().map_or(0, |c| c.len());
    for i in 0..rows {
        let line: Vec<String> = columns.iter().map(|c| format_number(c[i], config)).collect();
        writeln!(out, "{}", line.join(&config.delimiter.to_string()))?;
    }
    Ok(())
}

/// Indices of `n_points` evenly spaced columns out of `total`
///
/// First and last are always kept.
pub(crate) fn downsample_indices(total: usize, n_points: Option<usize>) -> Vec<usize> {
    match n_points {
        Some(n) if n >= 2 && n < total => {
            let mut indices: Vec<usize> = (0..n)
                .map(|i| (i * (total - 1) + (n - 1) / 2) / (n - 1))
                .collect();
            indices.dedup();
            indices
        }
        Some(1) if total > 0 => vec![total - 1],
        _ => (0..total).collect(),
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a single profile `u(x)` to CSV
///
/// # Errors
///
/// - Empty data
/// - Mismatched lengths
/// - NaN or Inf values
/// - File creation errors
pub fn export_profile_csv(
    x: &[f64],
    u: &[f64],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    if x.is_empty() {
        return Err(CsvError::Empty("profile"));
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    check_column(&configuration.position_header, x, x.len())?;
    check_column(&configuration.value_header, u, x.len())?;

    let mut out = BufWriter::new(File::create(output_path)?);
    write_preamble(&mut out, configuration)?;

    writeln!(
        out,
        "{}{}{}",
        configuration.position_header,
        configuration.delimiter,
        configuration.value_header
    )?;
    write_rows(&mut out, &[x, u], configuration)?;
    out.flush()?;

    Ok(())
}

/// Export the final computed profile next to the exact one
///
/// Columns: position, computed, exact, computed − exact.
///
/// # Example
///
/// ```rust,ignore
/// export_comparison_csv(x, u, u_exact, "final.csv", None)?;
/// ```
pub fn export_comparison_csv(
    x: &[f64],
    computed: &[f64],
    exact: &[f64],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    if x.is_empty() {
        return Err(CsvError::Empty("profile"));
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    let value = &configuration.value_header;
    let exact_header = format!("{}_exact", value);
    let error_header = format!("{}-{}_exact", value, value);

    check_column(&configuration.position_header, x, x.len())?;
    check_column(value, computed, x.len())?;
    check_column(&exact_header, exact, x.len())?;

    let error: Vec<f64> = computed.iter().zip(exact.iter()).map(|(u, ue)| u - ue).collect();

    let mut out = BufWriter::new(File::create(output_path)?);
    write_preamble(&mut out, configuration)?;

    let d = configuration.delimiter;
    writeln!(
        out,
        "{}{d}{}{d}{}{d}{}",
        configuration.position_header, value, exact_header, error_header
    )?;
    write_rows(&mut out, &[x, computed, exact, &error], configuration)?;
    out.flush()?;

    Ok(())
}

/// Export the stored history: one row per node, one column per time
///
/// `n_points` keeps that many evenly spaced time columns, first and last
/// included. `None` exports all of them.
///
/// # Errors
///
/// Non-finite values are rejected; unstable runs that overflowed cannot be
/// exported.
pub fn export_history_csv(
    result: &SimulationResult,
    n_points: Option<usize>,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    if result.is_empty() || result.nodes() == 0 {
        return Err(CsvError::Empty("history"));
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let indices = downsample_indices(result.len(), n_points);
    let x: Vec<f64> = result.x.iter().copied().collect();
    check_column(&configuration.position_header, &x, result.nodes())?;

    let mut headers = vec![configuration.position_header.clone()];
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(indices.len());
    for &j in &indices {
        let header = format!("t={}", format_number(result.time_points[j], configuration));
        let column: Vec<f64> = result.field.column(j).iter().copied().collect();
        check_column(&header, &column, result.nodes())?;
        headers.push(header);
        columns.push(column);
    }

    let mut out = BufWriter::new(File::create(output_path)?);
    write_preamble(&mut out, configuration)?;
    writeln!(out, "{}", headers.join(&configuration.delimiter.to_string()))?;

    let mut all: Vec<&[f64]> = vec![&x];
    all.extend(columns.iter().map(Vec::as_slice));
    write_rows(&mut out, &all, configuration)?;
    out.flush()?;

    Ok(())
}

// =============================================================================
// Exporter implementation
// =============================================================================

/// CSV implementation of [`Exporter`]
///
/// # Example
///
/// ```rust,ignore
/// let exporter = CsvExporter::default();
/// exporter.export_history(&result, Some(5), "history.csv")?;
/// ```
#[derive(Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_history(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), CsvError> {
        export_history_csv(result, n_points, path, Some(&self.config))
    }

    fn export_comparison(
        &self,
        x: &[f64],
        computed: &[f64],
        exact: &[f64],
        path: &str,
    ) -> Result<(), CsvError> {
        export_comparison_csv(x, computed, exact, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FtcsSolver, Scenario, Solver, SolverConfiguration};
    use std::fs;

    fn solved() -> SimulationResult {
        FtcsSolver::new()
            .solve(
                &Scenario::default(),
                &SolverConfiguration::default().with_steps(101).with_nodes(11),
            )
            .unwrap()
    }

    fn data_lines(content: &str) -> Vec<&str> {
        content.lines().filter(|l| !l.starts_with('#')).collect()
    }

    #[test]
    fn test_format_number() {
        let config = CsvConfig::default().precision(3);
        assert_eq!(format_number(1.23456, &config), "1.235");

        let european = CsvConfig::european().precision(2);
        assert_eq!(format_number(0.5, &european), "0,50");
    }

    #[test]
    fn test_downsample_indices() {
        assert_eq!(downsample_indices(5, None), vec![0, 1, 2, 3, 4]);
        assert_eq!(downsample_indices(5, Some(10)), vec![0, 1, 2, 3, 4]);
        assert_eq!(downsample_indices(101, Some(3)), vec![0, 50, 100]);
        assert_eq!(downsample_indices(10, Some(1)), vec![9]);
        assert_eq!(downsample_indices(10, Some(2)), vec![0, 9]);
    }

    #[test]
    fn test_export_profile_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.csv");

        export_profile_csv(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0], path.to_str().unwrap(), None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "x,u");
        assert_eq!(lines[2], "0.500000,1.000000");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_export_profile_rejects_bad_input() {
        let err = export_profile_csv(&[], &[], "unused.csv", None).unwrap_err();
        assert!(matches!(err, CsvError::Empty(_)));

        let err = export_profile_csv(&[0.0, 1.0], &[0.0], "unused.csv", None).unwrap_err();
        assert!(matches!(err, CsvError::LengthMismatch { expected: 2, found: 1, .. }));

        let err = export_profile_csv(&[0.0, 1.0], &[0.0, f64::NAN], "unused.csv", None).unwrap_err();
        assert!(matches!(err, CsvError::NonFinite(ref c) if c == "u"));
    }

    #[test]
    fn test_export_comparison_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final.csv");

        export_comparison_csv(
            &[0.0, 0.5, 1.0],
            &[0.0, 0.75, 0.0],
            &[0.0, 0.5, 0.0],
            path.to_str().unwrap(),
            Some(&CsvConfig::default().precision(2)),
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "x,u,u_exact,u-u_exact");
        assert_eq!(lines[2], "0.50,0.75,0.50,0.25");
    }

    #[test]
    fn test_export_history_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let result = solved();

        export_history_csv(&result, Some(3), path.to_str().unwrap(), None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines = data_lines(&content);
        assert_eq!(lines.len(), 1 + result.nodes());
        assert_eq!(lines[0], "x,t=0.000000,t=0.250000,t=0.500000");
        // Boundary rows stay at zero
        assert_eq!(lines[1], "0.000000,0.000000,0.000000,0.000000");
    }

    #[test]
    fn test_metadata_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.csv");
        let result = solved();

        let mut metadata = CsvMetadata::from_result(&result);
        metadata.add_custom("Run".to_string(), "unit".to_string());
        let exporter = CsvExporter::new(CsvConfig::default().with_metadata(metadata));

        exporter.export_history(&result, Some(2), path.to_str().unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Heat Equation Simulation Data"));
        assert!(content.contains("# Generated: "));
        assert!(content.contains("# Model: Sine Profile"));
        assert!(content.contains("# Solver: FTCS"));
        assert!(content.contains("# Nodes: 11"));
        assert!(content.contains("# Time Steps: 101"));
        assert!(content.contains("# Run: unit"));
        assert!(content.contains("# L2 Error: "));
    }

    #[test]
    fn test_metadata_from_result() {
        let result = solved();
        let metadata = CsvMetadata::from_result(&result);

        assert_eq!(metadata.diffusivity, Some(0.1));
        assert_eq!(metadata.length, Some(1.0));
        assert_eq!(metadata.horizon, Some(0.5));
        assert_eq!(metadata.l2_error, result.error);
    }
}

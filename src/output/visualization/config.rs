//! Plot configuration shared across visualization modules
//!
//! This module defines the configuration used by the solution, error and
//! evolution figures, plus the axis-range helper they share.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Color of continuous curves
/// - `marker_color`: Color of the computed nodes
/// - `series_colors`: Optional palette for multi-profile plots
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `marker_size`: Marker radius in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use heat_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::solution("t = 0.5");
/// config.marker_color = RED;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: "x")
    pub xlabel: String,

    /// Y-axis label (default: "u")
    pub ylabel: String,

    /// Continuous curve color (default: BLACK)
    pub line_color: RGBColor,

    /// Marker color for computed values (default: BLUE)
    pub marker_color: RGBColor,

    /// Optional colors for multi-profile plots
    ///
    /// If None, uses default palette: [BLUE, RED, GREEN, MAGENTA, CYAN, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Marker radius in pixels (default: 4)
    pub marker_size: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "x".to_string(),
            ylabel: "u".to_string(),
            line_color: BLACK,
            marker_color: BLUE,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            marker_size: 4,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::solution(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for the computed-versus-exact profile
    ///
    /// Axis labels "x" / "u", default title "FTCS vs Exact"
    pub fn solution(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "FTCS vs Exact".to_string());
        config
    }

    /// Config for the pointwise error profile
    ///
    /// Axis labels "x" / "u − u_e", default title "Pointwise Error"
    pub fn error(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.ylabel = "u − u_e".to_string();
        config.line_color = RED;
        config.marker_color = RED;
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Pointwise Error".to_string());
        config
    }

    /// Config for several profiles at different times
    ///
    /// Axis labels "x" / "u", default title "Profile Evolution"
    pub fn evolution(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Profile Evolution".to_string());
        config
    }

    /// Get color for series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors
            && series_index < colors.len() {
                return colors[series_index];
            }

        let default_colors = [
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),  // Orange
            RGBColor(128, 0, 128),  // Purple
        ];

        default_colors[series_index % default_colors.len()]
    }
}

/// Padded `(min, max)` over the finite values of several series
///
/// Returns `None` when no value is finite. A flat series gets a symmetric
/// margin so the axis range is never empty.
pub(crate) fn value_range(series: &[&[f64]]) -> Option<(f64, f64)> {
    let (lo, hi) = series
        .iter()
        .flat_map(|s| s.iter())
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }

    let span = hi - lo;
    let pad = if span > 0.0 { 0.05 * span } else { lo.abs().max(1e-12) * 0.1 };
    Some((lo - pad, hi + pad))
}

// =================================================================================================
// Tests
// =================================================================================================

//! Temperature profile plotting
//!
//! Computed nodes are drawn as markers and the closed form as a continuous
//! curve, so the discretization error is visible at a glance.
//!
//! # Usage
//!
//! ```rust,ignore
//! use heat_rs::output::visualization::plot_solution;
//!
//! plot_solution(&x, &computed, (&x_fine, &exact), "ftcs_solution.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::solver::SimulationResult;
use super::config::{value_range, PlotConfig, NO_TITLE};

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot the computed profile against the exact solution
///
/// # Arguments
///
/// * `x` - Node positions of the computed profile
/// * `computed` - FTCS values at those nodes
/// * `exact` - `(positions, values)` of the closed form, usually on a finer grid
/// * `output_path` - Path to save the plot (PNG or SVG)
/// * `config` - Optional plot configuration
///
/// # Errors
///
/// Mismatched slice lengths, an empty profile, a profile without any finite
/// value, or a drawing failure.
pub fn plot_solution(
    x: &[f64],
    computed: &[f64],
    exact: (&[f64], &[f64]),
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let (exact_x, exact_u) = exact;

    if x.is_empty() || exact_x.is_empty() {
        return Err("Empty profile".into());
    }
    if x.len() != computed.len() || exact_x.len() != exact_u.len() {
        return Err(format!(
            "Length mismatch: {} nodes / {} values, {} exact nodes / {} exact values",
            x.len(), computed.len(), exact_x.len(), exact_u.len()
        ).into());
    }

    let default_config = PlotConfig::solution(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let x_range = value_range(&[x, exact_x]).ok_or("No finite node position")?;
    let y_range = value_range(&[computed, exact_u]).ok_or("No finite value to plot")?;

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_solution_impl(backend, x, computed, exact, config, x_range, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_solution_impl(backend, x, computed, exact, config, x_range, y_range)
        }
    }
}

fn plot_solution_impl<DB: DrawingBackend>(
    backend: DB,
    x: &[f64],
    computed: &[f64],
    exact: (&[f64], &[f64]),
    config: &PlotConfig,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    if config.show_grid {
        chart.configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;
    }

    let line_color = config.line_color;
    chart.draw_series(LineSeries::new(
        exact.0.iter().zip(exact.1.iter())
            .filter(|(_, u)| u.is_finite())
            .map(|(x, u)| (*x, *u)),
        ShapeStyle::from(&line_color).stroke_width(config.line_width),
    ))?
        .label("Exact")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &line_color));

    let marker_color = config.marker_color;
    let marker_size = config.marker_size;
    chart.draw_series(
        x.iter().zip(computed.iter())
            .filter(|(_, u)| u.is_finite())
            .map(|(x, u)| Circle::new((*x, *u), marker_size, marker_color.filled())),
    )?
        .label("FTCS")
        .legend(move |(x, y)| Circle::new((x + 10, y), marker_size, marker_color.filled()));

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Plot several labelled profiles on the same axes
///
/// # Arguments
///
/// * `profiles` - Vec of (label, x_values, u_values)
/// * `output_path` - Path to save the plot
/// * `config` - Optional plot configuration
pub fn plot_profile_comparison(
    profiles: Vec<(&str, &[f64], &[f64])>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }
    if let Some((label, _, _)) = profiles.iter().find(|(_, x, u)| x.len() != u.len()) {
        return Err(format!("Length mismatch in profile '{}'", label).into());
    }

    let default_config = PlotConfig::evolution(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let xs: Vec<&[f64]> = profiles.iter().map(|(_, x, _)| *x).collect();
    let us: Vec<&[f64]> = profiles.iter().map(|(_, _, u)| *u).collect();
    let x_range = value_range(&xs).ok_or("No finite node position")?;
    let y_range = value_range(&us).ok_or("No finite value to plot")?;

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &profiles, config, x_range, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &profiles, config, x_range, y_range)
        }
    }
}

fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    profiles: &[(&str, &[f64], &[f64])],
    config: &PlotConfig,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    if config.show_grid {
        chart.configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;
    }

    for (idx, (label, x_values, u_values)) in profiles.iter().enumerate() {
        let color = config.get_series_color(idx);

        chart
            .draw_series(LineSeries::new(
                x_values.iter().zip(u_values.iter())
                    .filter(|(_, u)| u.is_finite())
                    .map(|(x, u)| (*x, *u)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Plot profile evolution (several time snapshots)
///
/// Snapshots are spread evenly over the stored history; the last one is
/// always the final time.
///
/// # Example
///
/// ```rust,ignore
/// plot_profile_evolution(&result, 5, "evolution.png", None)?;
/// ```
pub fn plot_profile_evolution(
    result: &SimulationResult,
    n_snapshots: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if result.is_empty() {
        return Err("Empty history".into());
    }
    if n_snapshots == 0 {
        return Err("Need at least one snapshot".into());
    }

    let columns = snapshot_columns(result.len(), n_snapshots);
    let x: Vec<f64> = result.x.iter().copied().collect();

    let profiles: Vec<(String, Vec<f64>)> = columns
        .iter()
        .map(|&j| {
            let label = format!("t={:.3}", result.time_points[j]);
            (label, result.column(j).iter().copied().collect())
        })
        .collect();

    let profile_refs: Vec<(&str, &[f64], &[f64])> = profiles
        .iter()
        .map(|(label, u)| (label.as_str(), x.as_slice(), u.as_slice()))
        .collect();

    plot_profile_comparison(profile_refs, output_path, config)
}

/// Evenly spread column indices, first and last included
fn snapshot_columns(total: usize, n_snapshots: usize) -> Vec<usize> {
    let n = n_snapshots.min(total);
    if n <= 1 {
        return vec![total - 1];
    }
    let mut columns: Vec<usize> = (0..n)
        .map(|i| (i * (total - 1) + (n - 1) / 2) / (n - 1))
        .collect();
    columns.dedup();
    columns
}

// =================================================================================================
// Tests
// =================================================================================================

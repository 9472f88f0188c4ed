//! Pointwise error plotting
//!
//! Draws `u − u_e` at the mesh nodes, with a zero reference line.

use plotters::prelude::*;
use std::error::Error;

use super::config::{value_range, PlotConfig, NO_TITLE};

/// Plot the pointwise error of a computed profile
///
/// # Arguments
///
/// * `x` - Node positions
/// * `error` - `computed - exact` at those nodes
/// * `output_path` - Path to save the plot (PNG or SVG)
/// * `config` - Optional plot configuration, defaults to [`PlotConfig::error`]
///
/// # Example
///
/// ```rust,ignore
/// let e = accuracy::pointwise_error(&scenario, &result.x, u, t, alpha, length).unwrap();
/// plot_error(x.as_slice(), e.as_slice(), "ftcs_error.png", None)?;
/// ```
pub fn plot_error(
    x: &[f64],
    error: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if x.is_empty() {
        return Err("Empty profile".into());
    }
    if x.len() != error.len() {
        return Err(format!("Length mismatch: {} nodes, {} errors", x.len(), error.len()).into());
    }

    let default_config = PlotConfig::error(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let x_range = value_range(&[x]).ok_or("No finite node position")?;
    // Zero is always on the axis
    let zero = [0.0];
    let y_range = value_range(&[error, &zero[..]]).ok_or("No finite error to plot")?;

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_error_impl(backend, x, error, config, x_range, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_error_impl(backend, x, error, config, x_range, y_range)
        }
    }
}

fn plot_error_impl<DB: DrawingBackend>(
    backend: DB,
    x: &[f64],
    error: &[f64],
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
        .y_label_area_size(80)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    if config.show_grid {
        chart.configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.1e}", y))
            .draw()?;
    }

    chart.draw_series(LineSeries::new(
        vec![(x_range.0, 0.0), (x_range.1, 0.0)],
        ShapeStyle::from(&BLACK.mix(0.4)).stroke_width(1),
    ))?;

    let points: Vec<(f64, f64)> = x.iter().zip(error.iter())
        .filter(|(_, e)| e.is_finite())
        .map(|(x, e)| (*x, *e))
        .collect();

    let line_color = config.line_color;
    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        ShapeStyle::from(&line_color).stroke_width(config.line_width),
    ))?
        .label("u − u_e")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &line_color));

    let marker_color = config.marker_color;
    chart.draw_series(
        points.iter().map(|p| Circle::new(*p, config.marker_size, marker_color.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_error_rejects_mismatch() {
        assert!(plot_error(&[0.0, 1.0], &[0.0], "unused.png", None).is_err());
        assert!(plot_error(&[], &[], "unused.png", None).is_err());
    }

    #[test]
    fn test_plot_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("error.png");

        let x: Vec<f64> = (0..11).map(|i| i as f64 / 10.0).collect();
        let e: Vec<f64> = x.iter().map(|x| 1e-3 * (std::f64::consts::PI * x).sin()).collect();

        plot_error(&x, &e, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_error_all_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.svg");

        plot_error(&[0.0, 0.5, 1.0], &[0.0; 3], path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }
}

//! Default FTCS Run
//!
//! u_t = α·u_xx on [0, L], u(x, 0) = sin(πx/L), u(0, t) = u(L, t) = 0
//!
//! Runs the default grid (nt = 10, nx = 20, α = 0.1, L = 1, tmax = 0.5),
//! prints the report and writes the solution and error figures, a CSV of the
//! final comparison and a CSV of the history into `output/default_run/`.

use heat_rs::{
    driver::heat_ftcs,
    output::export::{CsvConfig, CsvExporter, CsvMetadata, Exporter},
    output::visualization::{plot_profile_evolution, PlotConfig},
    solver::{accuracy, Scenario, SolverConfiguration},
};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== 1D Heat Equation: FTCS, default grid ===\n");

    let out_dir = Path::new("output/default_run");
    let config = SolverConfiguration::default().with_plots(out_dir);

    println!("Parameters:");
    println!("  Time points nt:  {}", config.steps);
    println!("  Nodes nx:        {}", config.nodes);
    println!("  Diffusivity α:   {}", config.diffusivity);
    println!("  Length L:        {}", config.length);
    println!("  Horizon tmax:    {}", config.horizon);
    println!("  Ratio r:         {:.4}{}\n",
        config.stability_ratio(),
        if config.is_stable() { "" } else { "  (above 0.5, unstable)" });

    let result = heat_ftcs(&config)?;

    // Final comparison and history as CSV
    let exact = accuracy::exact_profile(
        &Scenario::default(),
        &result.x,
        result.final_time(),
        config.diffusivity,
        config.length,
    )
    .ok_or("no closed form for the default problem")?;

    let exporter = CsvExporter::new(
        CsvConfig::default().with_metadata(CsvMetadata::from_result(&result)),
    );
    let final_profile = result.final_profile().ok_or("empty result")?;
    exporter.export_comparison(
        result.x.as_slice(),
        final_profile.as_slice(),
        exact.as_slice(),
        "output/default_run/final.csv",
    )?;
    exporter.export_history(&result, None, "output/default_run/history.csv")?;

    plot_profile_evolution(
        &result,
        5,
        "output/default_run/evolution.png",
        Some(&PlotConfig::evolution("u(x, t), default grid")),
    )?;

    println!("\nFiles written to {}", out_dir.display());
    Ok(())
}

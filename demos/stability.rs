//! Stability Limit of FTCS
//!
//! Same mesh, two time steps: r = α·dt/dx² just above and well below 0.5.
//! Above the limit the shortest mesh mode is amplified at every step and the
//! error explodes; below it the run converges.

use heat_rs::{
    output::{format_report, plot_profile_comparison, PlotConfig},
    solver::{FtcsStepper, Scenario, SolverConfiguration},
    driver::heat_ftcs,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== FTCS stability: r above and below 0.5 ===\n");

    let unstable = SolverConfiguration::default().with_nodes(100).with_steps(800);
    let stable = SolverConfiguration::default().with_nodes(100).with_steps(2000);

    let mut results = Vec::new();
    for (label, config) in [("unstable", &unstable), ("stable", &stable)] {
        println!("--- {} (nt = {}) ---", label, config.steps);
        let result = heat_ftcs(config)?;
        println!("{}\n", format_report(&result));
        results.push(result);
    }

    // Watch the unstable run grow, without keeping its history
    let scenario = Scenario::default();
    println!("Max |u| along the unstable run:");
    for snapshot in FtcsStepper::new(&scenario, &unstable)?.step_by(100) {
        println!("  t = {:.4}  max |u| = {:10.3e}", snapshot.time, snapshot.values.amax());
    }

    // Final profiles side by side
    std::fs::create_dir_all("output/stability")?;
    let x: Vec<f64> = results[1].x.iter().copied().collect();
    let profiles: Vec<(String, Vec<f64>)> = results
        .iter()
        .filter_map(|r| {
            let u = r.final_profile()?;
            Some((format!("r = {:.3}", r.ratio), u.iter().copied().collect()))
        })
        .collect();

    plot_profile_comparison(
        profiles
            .iter()
            .map(|(label, u)| (label.as_str(), x.as_slice(), u.as_slice()))
            .collect(),
        "output/stability/profiles.png",
        Some(&PlotConfig::evolution("Final profiles around the stability limit")),
    )?;

    println!("\nPlot written to output/stability/profiles.png");
    Ok(())
}

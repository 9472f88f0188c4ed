//! Convergence Study at Fixed Ratio
//!
//! Halves dx three times while choosing dt so that r stays at 0.25. The
//! nodal error is O(dx²); the L2 norm over nx nodes therefore drops by about
//! 4/√2 per halving. Repeated for the three built-in models.

use heat_rs::{
    models::{ShiftedSine, SineProfile, SineSeries},
    solver::{accuracy::refine_fixed_ratio, Scenario, SolverConfiguration},
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== FTCS convergence, r = 0.25 ===\n");

    let base = SolverConfiguration::default();
    let intervals = [10, 20, 40, 80];

    let scenarios = [
        Scenario::new(Box::new(SineProfile::default())),
        Scenario::new(Box::new(SineSeries::new(vec![1.0, -0.5, 0.25]))),
        Scenario::new(Box::new(ShiftedSine::new(1.0, 2.0, 0.5))),
    ];

    for scenario in &scenarios {
        println!("{}", scenario.get_model_name());
        println!("  {:>6} {:>6} {:>8} {:>12} {:>8}", "nx", "nt", "r", "error", "ratio");

        let levels = refine_fixed_ratio(scenario, &base, 0.25, &intervals)?;
        let mut previous: Option<f64> = None;
        for level in &levels {
            let reduction = previous.map_or_else(|| "-".to_string(), |p| format!("{:.2}", p / level.error));
            println!(
                "  {:>6} {:>6} {:>8.4} {:>12.4e} {:>8}",
                level.nodes, level.steps, level.ratio, level.error, reduction
            );
            previous = Some(level.error);
        }
        println!();
    }

    Ok(())
}

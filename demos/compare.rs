//! Demo: three-way generator comparison
//!
//! Runs the analytical, Euler, and Verlet generators on the classic
//! case (k = 1, m = 1, x0 = 0, v0 = 1, dt = 0.25, n = 100), prints the
//! energy summary, and renders the phase-space portrait plus the
//! energy-vs-time comparison.
//!
//! The phase-space view is the study's signature picture: the exact
//! solution traces a closed circle, the Euler run spirals outward as it
//! gains energy, and the Verlet run stays on a slightly wobbling closed
//! orbit.
//!
//! Run with:
//!   cargo run --example compare

use std::error::Error;
use std::time::Instant;

use oscil_rs::output::{plot_energy_comparison, plot_phase_space, PlotConfig};
use oscil_rs::physics::Trajectory;
use oscil_rs::solver::{
    AnalyticalSolver, EulerSolver, Integrator, Scenario, StepConfiguration, VerletSolver,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Harmonic Oscillator - Integration Scheme Comparison");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Simulation configuration ======

    let nsteps = 100;
    let dt = 0.25;

    let scenario = Scenario::classic();
    let config = StepConfiguration::new(nsteps, dt);

    println!("Scenario:");
    println!("  k (spring)     : {}", scenario.oscillator.spring_constant());
    println!("  m (mass)       : {}", scenario.oscillator.mass());
    println!("  x0 (position)  : {}", scenario.initial.position);
    println!("  v0 (velocity)  : {}", scenario.initial.velocity);
    println!("  Exact energy   : {}\n", scenario.initial_energy());

    println!("Simulation:");
    println!("  Time steps : {}", nsteps);
    println!("  dt         : {} s", dt);
    println!("  Total time : {} s\n", config.total_time());

    // ====== Run all three generators ======

    let generators: Vec<(&str, Box<dyn Integrator>)> = vec![
        ("Analytical", Box::new(AnalyticalSolver::new())),
        ("Euler", Box::new(EulerSolver::new())),
        ("Verlet", Box::new(VerletSolver::new())),
    ];

    println!("═══════════════════════════════════════════════════════");
    println!("  Running Generators");
    println!("═══════════════════════════════════════════════════════\n");

    let mut results: Vec<(&str, f64, Trajectory)> = Vec::new();

    for (name, generator) in &generators {
        let start = Instant::now();
        let trajectory = generator.integrate(&scenario, &config)?;
        let elapsed = start.elapsed().as_secs_f64();

        println!("  {:<12} ✓ {:.2e}s ({} samples)", name, elapsed, trajectory.len());
        results.push((*name, elapsed, trajectory));
    }

    // ====== Energy summary ======

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Results: Energy Behavior");
    println!("═══════════════════════════════════════════════════════\n");

    println!(
        "{:<12} {:>12} {:>12} {:>12}",
        "Generator", "E(0)", "E(T)", "Drift"
    );
    println!("{:-<50}", "");

    for (name, _, trajectory) in &results {
        let first = trajectory.first().unwrap().energy;
        let last = trajectory.last().unwrap().energy;
        println!(
            "{:<12} {:>12.6} {:>12.6} {:>+12.6}",
            name,
            first,
            last,
            trajectory.energy_drift()
        );
    }

    // ====== Generate plots ======

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Generating Plots");
    println!("═══════════════════════════════════════════════════════\n");

    let tmp_dir = std::env::temp_dir();
    let mass = scenario.oscillator.mass();

    let phase_path = tmp_dir.join("phase_evolution.png");
    let phase_datasets = results
        .iter()
        .map(|(name, _, trajectory)| (*name, trajectory, mass))
        .collect();
    let phase_config =
        PlotConfig::phase_space("Phase Space Evolution of Numerical & Analytical Solutions");
    plot_phase_space(
        phase_datasets,
        phase_path.to_str().unwrap(),
        Some(&phase_config),
    )?;
    println!("  Phase space : {:?}", phase_path);

    let energy_path = tmp_dir.join("energy_evolution.png");
    let energy_datasets = results
        .iter()
        .map(|(name, _, trajectory)| (*name, trajectory))
        .collect();
    plot_energy_comparison(energy_datasets, energy_path.to_str().unwrap(), None)?;
    println!("  Energy      : {:?}", energy_path);

    Ok(())
}

//! Demo: fixed-width report table for one generator
//!
//! Mirrors the single-scheme study scripts: integrate the classic
//! oscillator (k = 1, m = 1, x0 = 0, v0 = 1) and print every
//! `nprint`-th sample as a fixed-width table row.
//!
//! Run with:
//!   cargo run --example print_table -- <method> <nsteps> <dt> <nprint>
//!
//!   method: analytic | euler | verlet
//!   nsteps: number of simulation steps desired
//!   dt    : size of time-step
//!   nprint: frequency of printed step information

use std::error::Error;

use oscil_rs::output::print_report;
use oscil_rs::solver::{
    AnalyticalSolver, EulerSolver, Integrator, Scenario, StepConfiguration, VerletSolver,
};

fn print_usage(program: &str) {
    println!("Invalid number of arguments.");
    println!("Usage: {} method nsteps dt nprint", program);
    println!("==============================================");
    println!("method: Generation scheme (analytic, euler, verlet)");
    println!("nsteps: Number of simulation steps desired");
    println!("dt    : Size of time-step");
    println!("nprint: Frequency of printed step information");
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 5 {
        print_usage(&args[0]);
        return Ok(());
    }

    // ====== Parse Input ======

    // Malformed numerics are an input-format concern and are reported
    // here at the boundary; the core never sees them.
    let method = args[1].as_str();
    let nsteps: usize = args[2]
        .parse()
        .map_err(|e| format!("Invalid nsteps '{}': {}", args[2], e))?;
    let dt: f64 = args[3]
        .parse()
        .map_err(|e| format!("Invalid dt '{}': {}", args[3], e))?;
    let nprint: usize = args[4]
        .parse()
        .map_err(|e| format!("Invalid nprint '{}': {}", args[4], e))?;

    let generator: Box<dyn Integrator> = match method {
        "analytic" | "analytical" => Box::new(AnalyticalSolver::new()),
        "euler" => Box::new(EulerSolver::new()),
        "verlet" => Box::new(VerletSolver::new()),
        other => {
            return Err(format!(
                "Unknown method '{}', expected analytic, euler or verlet",
                other
            )
            .into())
        }
    };

    // ====== Run & Report ======

    // Hard-coded constants of the study: k = 1, m = 1, x0 = 0, v0 = 1
    let scenario = Scenario::classic();
    let config = StepConfiguration::new(nsteps, dt);

    let trajectory = generator.integrate(&scenario, &config)?;
    print_report(&trajectory, nprint)?;

    Ok(())
}

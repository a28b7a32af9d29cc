//! Console report for simulation trajectories
//!
//! Formats a trajectory as the fixed-width table the original study
//! prints: one row of (time, position, velocity, energy) per surfaced
//! sample, preceded by a header and a rule line.
//!
//! The report frequency controls which samples are **surfaced**, never
//! which are computed — the full trajectory of `n + 1` samples always
//! exists before this module sees it. A sample is surfaced when its step
//! index is a multiple of the frequency; step 0 is always included.
//!
//! # Example
//!
//! ```rust
//! use oscil_rs::output::write_report;
//! use oscil_rs::solver::{EulerSolver, Integrator, Scenario, StepConfiguration};
//!
//! let trajectory = EulerSolver::new()
//!     .integrate(&Scenario::classic(), &StepConfiguration::new(100, 0.25))?;
//!
//! let mut buffer = Vec::new();
//! write_report(&trajectory, 10, &mut buffer)?;
//!
//! let text = String::from_utf8(buffer)?;
//! assert!(text.starts_with("  Time    Position"));
//! // 2 header lines + steps 0, 10, 20, ..., 100
//! assert_eq!(text.lines().count(), 2 + 11);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::error::Error;
use std::io::Write;

use crate::physics::Trajectory;

/// Write the fixed-width report table to any writer
///
/// # Arguments
///
/// * `trajectory` - Complete trajectory to report on
/// * `frequency` - Surface every `frequency`-th sample (must be ≥ 1)
/// * `writer` - Output sink (stdout, a buffer, ...)
///
/// # Errors
///
/// Returns `Err` when `frequency` is zero or the writer fails.
pub fn write_report<W: Write>(
    trajectory: &Trajectory,
    frequency: usize,
    writer: &mut W,
) -> Result<(), Box<dyn Error>> {
    if frequency == 0 {
        return Err("Report frequency must be a positive integer".into());
    }

    writeln!(
        writer,
        "{:^8}  {:^8}    {:^8}  {:^8}",
        "Time", "Position", "Velocity", "Energy"
    )?;
    writeln!(writer, "==========================================")?;

    for (_, sample) in trajectory.every_nth(frequency) {
        writeln!(
            writer,
            "{:^8.2}  {:+8.2e}  {:+8.2e}  {:8.2e}",
            sample.time, sample.position, sample.velocity, sample.energy
        )?;
    }

    Ok(())
}

/// Print the report table to stdout
///
/// Convenience wrapper around [`write_report`].
pub fn print_report(trajectory: &Trajectory, frequency: usize) -> Result<(), Box<dyn Error>> {
    write_report(trajectory, frequency, &mut std::io::stdout())
}

// =================================================================================================
// Tests
// =================================================================================================

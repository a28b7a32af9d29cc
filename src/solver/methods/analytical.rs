//! Analytical (closed-form) generator
//!
//! # Mathematical Background
//!
//! The undamped oscillator m·x'' = -k·x has the exact solution
//!
//! ```text
//! x(t) = A·sin(ω·t + φ)
//! v(t) = A·ω·cos(ω·t + φ)
//! ```
//!
//! with angular frequency ω = √(k/m), amplitude parameter
//! A = x0² + (v0/ω)², and phase shift φ = atan(x0·ω/v0). The amplitude
//! parameter is kept exactly as the study defines it (no square root);
//! for the classic case x0 = 0, v0 = 1, ω = 1 it evaluates to 1 and the
//! solution is x(t) = sin(t).
//!
//! Each sample is a pure function of the step index; there is no
//! recurrence and hence no accumulated numerical error. The analytical
//! trajectory is the reference the Euler and Verlet runs are measured
//! against.
//!
//! # Limitations
//!
//! The phase shift divides by v0, so a run released from rest (v0 = 0)
//! is rejected with a domain error before any sample is produced.

use crate::physics::{DomainError, Sample, Trajectory};
use crate::solver::{validate_sample, Integrator, Scenario, SolverError, StepConfiguration};

// =================================================================================================
// Analytical Generator
// =================================================================================================

/// Closed-form trajectory generator
///
/// # Algorithm
///
/// 1. Derive ω = √(k/m), A = x0² + (v0/ω)², φ = atan(x0·ω/v0)
/// 2. For each step l = 0, 1, ..., N:
///    - x = A·sin(ω·l·dt + φ)
///    - v = A·ω·cos(ω·l·dt + φ)
///    - Record the sample with energy from (x, v)
/// 3. Return the complete trajectory of N + 1 samples
///
/// # Example
///
/// ```rust
/// use oscil_rs::solver::{AnalyticalSolver, Integrator, Scenario, StepConfiguration};
///
/// let trajectory = AnalyticalSolver::new()
///     .integrate(&Scenario::classic(), &StepConfiguration::new(4, 0.25))?;
///
/// // x(1.0) = sin(1.0), exact energy 0.5 at every step
/// assert_eq!(trajectory[4].position, 1.0_f64.sin());
/// assert_eq!(trajectory[4].velocity, 1.0_f64.cos());
/// # Ok::<(), oscil_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalSolver;

impl AnalyticalSolver {
    /// Create a new analytical generator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for AnalyticalSolver {
    fn integrate(
        &self,
        scenario: &Scenario,
        config: &StepConfiguration,
    ) -> Result<Trajectory, SolverError> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let x0 = scenario.initial.position;
        let v0 = scenario.initial.velocity;

        // Phase shift divides by v0
        if v0 == 0.0 {
            return Err(DomainError::ZeroInitialVelocity.into());
        }

        // ====== Step 2: Derived Quantities ======

        let oscillator = &scenario.oscillator;
        let omega = oscillator.omega();
        let amplitude = x0 * x0 + (v0 / omega) * (v0 / omega);
        let phase = (x0 * omega / v0).atan();

        // ====== Step 3: Evaluation ======

        let mut trajectory = Trajectory::with_capacity(config.time_steps);

        for step in 0..=config.time_steps {
            let t = config.time_at(step);

            let position = amplitude * (omega * t + phase).sin();
            let velocity = amplitude * omega * (omega * t + phase).cos();

            let sample = Sample::from_state(oscillator, t, position, velocity);
            validate_sample(&sample, step)?;
            trajectory.push(sample);
        }

        Ok(trajectory)
    }

    fn name(&self) -> &str {
        "Analytical"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

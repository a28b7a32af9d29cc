//! Explicit Euler generator
//!
//! # Mathematical Background
//!
//! The explicit Euler scheme is the simplest time-stepping method for the
//! oscillator equations of motion. With the restoring force F = -k·x and
//! acceleration a = F/m, one transition from state (x, v, F) is:
//!
//! ```text
//! x_{n+1} = x_n + v_n·dt + ½·(F_n/m)·dt²
//! v_{n+1} = v_n + dt·F_n/m
//! ```
//!
//! The velocity update uses the force from the **start** of the step;
//! the force is not recomputed at the new position before updating v.
//! This stale-force update is reproduced exactly, not "corrected": the
//! scheme is first order, and the systematic energy drift it produces is
//! the observable the comparison study exists to show.
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate (error ~ O(dt))
//! - **Energy behavior**: systematic drift; for the classic comparison
//!   run (k = m = 1, x0 = 0, v0 = 1, dt = 0.25, n = 100) the total energy
//!   grows from 0.5 to ≈ 10.46, a factor of ≈ 20.9
//! - **Cost**: 1 force evaluation per step
//! - **Memory**: O(1) scalar state, O(n) trajectory storage

use crate::physics::{HarmonicOscillator, Sample, Trajectory};
use crate::solver::{validate_sample, Integrator, Scenario, SolverError, StepConfiguration};

// =================================================================================================
// Euler Transition
// =================================================================================================

/// One explicit Euler transition from state (x, v, f)
///
/// Returns (next position, next velocity). The velocity increment uses
/// the supplied force `f`, i.e. the force at the *old* position; the
/// caller recomputes the force at the new position afterwards. Shared
/// with [`VerletSolver`](crate::solver::VerletSolver), which uses exactly
/// one of these transitions to bootstrap its two-point recurrence.
#[inline]
pub(crate) fn euler_step(
    oscillator: &HarmonicOscillator,
    position: f64,
    velocity: f64,
    force: f64,
    dt: f64,
) -> (f64, f64) {
    let acceleration = force / oscillator.mass();

    let next_position = position + velocity * dt + 0.5 * acceleration * dt * dt;
    let next_velocity = velocity + dt * acceleration;

    (next_position, next_velocity)
}

// =================================================================================================
// Euler Generator
// =================================================================================================

/// Explicit Euler trajectory generator
///
/// # Algorithm
///
/// 1. Start from (x0, v0) with F0 = force(x0); record the initial sample
/// 2. For each step n = 0, 1, ..., N-1:
///    - Transition: x' = x + v·dt + ½(F/m)·dt², v' = v + dt·F/m
///    - Recompute the force at x' for the next transition
///    - Record the sample with energy from (x', v')
/// 3. Return the complete trajectory of N + 1 samples
///
/// # Stability
///
/// Conditionally stable. For the oscillator the scheme injects energy
/// every step regardless of dt; smaller steps only slow the drift down,
/// they never remove it.
///
/// # Example
///
/// ```rust
/// use oscil_rs::solver::{EulerSolver, Integrator, Scenario, StepConfiguration};
///
/// let trajectory = EulerSolver::new()
///     .integrate(&Scenario::classic(), &StepConfiguration::new(4, 0.25))?;
///
/// // First transition: x1 = 0 + 1·0.25 + 0 = 0.25, v1 = 1 (force was 0)
/// assert_eq!(trajectory[1].position, 0.25);
/// assert_eq!(trajectory[1].velocity, 1.0);
/// assert_eq!(trajectory[1].energy, 0.53125);
/// # Ok::<(), oscil_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Euler generator
    ///
    /// # Example
    ///
    /// ```rust
    /// use oscil_rs::solver::{EulerSolver, Integrator};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for EulerSolver {
    fn integrate(
        &self,
        scenario: &Scenario,
        config: &StepConfiguration,
    ) -> Result<Trajectory, SolverError> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let oscillator = &scenario.oscillator;
        let dt = config.dt;

        // ====== Step 2: Setup ======

        let mut position = scenario.initial.position;
        let mut velocity = scenario.initial.velocity;
        let mut force = oscillator.force(position);

        let mut trajectory = Trajectory::with_capacity(config.time_steps);
        trajectory.push(Sample::from_state(oscillator, 0.0, position, velocity));

        // ====== Step 3: Time Integration ======

        for step in 0..config.time_steps {
            // Transition with the force from the step start; the stale
            // force in the velocity update is the scheme, not an error.
            let (next_position, next_velocity) =
                euler_step(oscillator, position, velocity, force, dt);
            let next_force = oscillator.force(next_position);

            let sample = Sample::from_state(
                oscillator,
                config.time_at(step + 1),
                next_position,
                next_velocity,
            );
            validate_sample(&sample, step + 1)?;
            trajectory.push(sample);

            position = next_position;
            velocity = next_velocity;
            force = next_force;
        }

        Ok(trajectory)
    }

    fn name(&self) -> &str {
        "Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

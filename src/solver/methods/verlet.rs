//! Velocity Verlet generator
//!
//! # Mathematical Background
//!
//! The position-Verlet recurrence advances the position from its two most
//! recent values, then corrects the velocity with the force averaged over
//! the step:
//!
//! ```text
//! x_{n+1} = 2·x_n - x_{n-1} + (F_n/m)·dt²
//! F_{n+1} = force(x_{n+1})
//! v_{n+1} = v_n + dt/(2m)·(F_n + F_{n+1})
//! ```
//!
//! The recurrence needs **two** prior positions, so the first step cannot
//! use it. Sample 1 is therefore produced by a single explicit Euler
//! transition (the exact transition from
//! [`EulerSolver`](crate::solver::EulerSolver)), and the Verlet
//! recurrence takes over from step 2. The bootstrap carries the known
//! first-order error of that one Euler step; it is preserved as-is;
//! the comparison exists to illustrate exactly this construction, so it
//! must not be replaced by a self-starting variant.
//!
//! # Characteristics
//!
//! - **Order**: second-order accurate in position
//! - **Energy behavior**: bounded oscillation instead of drift; for the
//!   classic comparison run (k = m = 1, x0 = 0, v0 = 1, dt = 0.25,
//!   n = 100) the total energy stays within ≈ 0.032 of the exact 0.5
//!   while Euler has blown up twenty-fold
//! - **Cost**: 1 force evaluation per step
//! - **Memory**: O(1) scalar state (two positions, one velocity, one force)

use crate::physics::{Sample, Trajectory};
use crate::solver::methods::euler::euler_step;
use crate::solver::{validate_sample, Integrator, Scenario, SolverError, StepConfiguration};

// =================================================================================================
// Verlet Generator
// =================================================================================================

/// Velocity Verlet trajectory generator with Euler bootstrap
///
/// # Algorithm
///
/// 1. Record the initial sample (x0, v0)
/// 2. **Bootstrap** (step 1): one explicit Euler transition produces
///    (x1, v1); the recurrence below is undefined without two known
///    positions
/// 3. For each step n = 1, ..., N-1:
///    - Position: x_{n+1} = 2·x_n - x_{n-1} + (F_n/m)·dt²
///    - New force: F_{n+1} = -k·x_{n+1}
///    - Velocity: v_{n+1} = v_n + dt/(2m)·(F_n + F_{n+1})
///    - Record the sample with energy from (x_{n+1}, v_{n+1})
/// 4. Return the complete trajectory of N + 1 samples
///
/// # Example
///
/// ```rust
/// use oscil_rs::solver::{Integrator, Scenario, StepConfiguration, VerletSolver};
///
/// let trajectory = VerletSolver::new()
///     .integrate(&Scenario::classic(), &StepConfiguration::new(100, 0.25))?;
///
/// // Near-conservation: the energy stays close to the exact 0.5
/// let drift = trajectory.energy_drift().abs();
/// assert!(drift < 0.05);
/// # Ok::<(), oscil_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct VerletSolver;

impl VerletSolver {
    /// Create a new Verlet generator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for VerletSolver {
    fn integrate(
        &self,
        scenario: &Scenario,
        config: &StepConfiguration,
    ) -> Result<Trajectory, SolverError> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let oscillator = &scenario.oscillator;
        let mass = oscillator.mass();
        let dt = config.dt;

        // ====== Step 2: Setup ======

        let initial_position = scenario.initial.position;
        let initial_velocity = scenario.initial.velocity;
        let initial_force = oscillator.force(initial_position);

        let mut trajectory = Trajectory::with_capacity(config.time_steps);
        trajectory.push(Sample::from_state(
            oscillator,
            0.0,
            initial_position,
            initial_velocity,
        ));

        if config.time_steps == 0 {
            return Ok(trajectory);
        }

        // ====== Step 3: Euler Bootstrap (step 1) ======

        // The recurrence needs two prior positions; the first transition
        // reuses the explicit Euler step.
        let (mut position, mut velocity) = euler_step(
            oscillator,
            initial_position,
            initial_velocity,
            initial_force,
            dt,
        );
        let mut force = oscillator.force(position);
        let mut previous_position = initial_position;

        let bootstrap = Sample::from_state(oscillator, config.time_at(1), position, velocity);
        validate_sample(&bootstrap, 1)?;
        trajectory.push(bootstrap);

        // ====== Step 4: Verlet Recurrence (steps 2..=N) ======

        for step in 2..=config.time_steps {
            let next_position =
                2.0 * position - previous_position + force / mass * dt * dt;
            let next_force = oscillator.force(next_position);
            let next_velocity = velocity + dt / (2.0 * mass) * (force + next_force);

            let sample = Sample::from_state(
                oscillator,
                config.time_at(step),
                next_position,
                next_velocity,
            );
            validate_sample(&sample, step)?;
            trajectory.push(sample);

            previous_position = position;
            position = next_position;
            velocity = next_velocity;
            force = next_force;
        }

        Ok(trajectory)
    }

    fn name(&self) -> &str {
        "Verlet"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EulerSolver;

    fn classic_run(steps: usize) -> Trajectory {
        VerletSolver::new()
            .integrate(&Scenario::classic(), &StepConfiguration::new(steps, 0.25))
            .unwrap()
    }

    #[test]
    fn test_verlet_solver_name() {
        assert_eq!(VerletSolver::new().name(), "Verlet");
    }

    #[test]
    fn test_trajectory_length() {
        assert_eq!(classic_run(100).len(), 101);
    }

    #[test]
    fn test_zero_steps_yields_initial_sample_only() {
        let trajectory = classic_run(0);

        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory[0].position, 0.0);
        assert_eq!(trajectory[0].velocity, 1.0);
    }

    #[test]
    fn test_single_step_is_pure_bootstrap() {
        // n = 1 never reaches the recurrence: two samples, the second
        // from the Euler transition
        let trajectory = classic_run(1);

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory[1].position, 0.25);
        assert_eq!(trajectory[1].velocity, 1.0);
    }

    #[test]
    fn test_bootstrap_matches_euler_first_step() {
        let config = StepConfiguration::new(5, 0.25);
        let scenario = Scenario::classic();

        let verlet = VerletSolver::new().integrate(&scenario, &config).unwrap();
        let euler = EulerSolver::new().integrate(&scenario, &config).unwrap();

        // Identical through step 1, diverging from step 2 onwards
        assert_eq!(verlet[0], euler[0]);
        assert_eq!(verlet[1], euler[1]);
        assert_ne!(verlet[2], euler[2]);
    }

    #[test]
    fn test_second_step_matches_hand_computation() {
        // x2 = 2·0.25 - 0 + (-0.25)·0.0625 = 0.484375
        // F2 = -0.484375
        // v2 = 1 + 0.125·(-0.25 - 0.484375) = 0.908203125
        let trajectory = classic_run(2);

        assert_eq!(trajectory[2].position, 0.484375);
        assert_eq!(trajectory[2].velocity, 0.908203125);
    }

    #[test]
    fn test_energy_stays_bounded() {
        // Baseline from the classic run: |E - 0.5| < 0.032 at every step
        let trajectory = classic_run(100);

        for sample in &trajectory {
            assert!(
                (sample.energy - 0.5).abs() < 0.05,
                "energy {} escaped the conservation band at t = {}",
                sample.energy,
                sample.time
            );
        }
    }

    #[test]
    fn test_invalid_dt_rejected() {
        let result = VerletSolver::new()
            .integrate(&Scenario::classic(), &StepConfiguration::new(10, f64::NAN));

        assert!(result.is_err());
    }

    #[test]
    fn test_determinism() {
        assert_eq!(classic_run(64), classic_run(64));
    }
}

//! Generator trait and types
//!
//! # Design Philosophy
//!
//! The three generators (analytical, Euler, Verlet) share one capability:
//! run a [`Scenario`] under a [`StepConfiguration`] and produce a
//! [`Trajectory`]. Expressing that capability as the [`Integrator`] trait
//! lets the compare demo drive all three uniformly instead of duplicating
//! three loops.
//!
//! # Stability Guarantee
//!
//! - `Integrator` trait: STABLE, will not change
//! - `StepConfiguration`: STABLE (fields won't be removed)
//! - `SolverError`: EXTENSIBLE (new variants can be added)

use thiserror::Error;

use crate::physics::{DomainError, Trajectory};
use crate::solver::Scenario;

// =================================================================================================
// Solver Errors
// =================================================================================================

/// Errors a generator run can fail with
///
/// A failed generator produces no trajectory: there is no partial output
/// and no error is ever silently swallowed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Invalid physical parameters (model or initial conditions)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Step size must be a finite, nonzero number
    #[error("Step size must be finite and nonzero, got {0}")]
    InvalidStepSize(f64),

    /// NaN or Inf detected in the state between steps
    #[error(
        "Non-finite state detected at step {step}. This indicates numerical \
         instability; try reducing the step size."
    )]
    NonFiniteState { step: usize },
}

// =================================================================================================
// Step Configuration
// =================================================================================================

/// Configuration of a fixed-step integration run
///
/// # Design
///
/// Holds the two numerical parameters every generator shares: the number
/// of steps `n` and the step size `dt`. A run produces `n + 1` samples
/// (the initial state plus one per step), so `time_steps = 0` is valid and
/// yields a single-sample trajectory.
///
/// # Examples
///
/// ```rust
/// use oscil_rs::solver::StepConfiguration;
///
/// // 100 steps of 0.25 s, the classic comparison run
/// let config = StepConfiguration::new(100, 0.25);
/// assert_eq!(config.total_time(), 25.0);
/// assert!(config.validate().is_ok());
///
/// // Zero steps is valid: one sample, the initial state
/// assert!(StepConfiguration::new(0, 0.25).validate().is_ok());
///
/// // Zero step size is not
/// assert!(StepConfiguration::new(10, 0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepConfiguration {
    /// Number of integration steps n (≥ 0)
    pub time_steps: usize,

    /// Step size dt \[s\]
    pub dt: f64,
}

impl StepConfiguration {
    /// Create a configuration from step count and step size
    pub fn new(time_steps: usize, dt: f64) -> Self {
        Self { time_steps, dt }
    }

    /// Total simulated time n·dt \[s\]
    pub fn total_time(&self) -> f64 {
        self.time_steps as f64 * self.dt
    }

    /// Time at a step index, computed directly from the index
    ///
    /// Direct calculation `l·dt` rather than repeated accumulation
    /// `t += dt`: most step sizes are not exactly representable in binary
    /// and accumulated rounding would grow with the step count.
    #[inline]
    pub fn time_at(&self, step: usize) -> f64 {
        step as f64 * self.dt
    }

    /// Validate the numerical parameters
    ///
    /// The step count needs no check (`usize` cannot be negative and zero
    /// is a valid run). The step size must be finite and nonzero; a
    /// negative `dt` is accepted since the recurrences are well defined
    /// backwards in time.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.dt.is_finite() || self.dt == 0.0 {
            return Err(SolverError::InvalidStepSize(self.dt));
        }
        Ok(())
    }
}

// =================================================================================================
// Integrator Trait
// =================================================================================================

/// A trajectory generator
///
/// # Responsibility
///
/// Applies one generation scheme (closed-form evaluation or a numerical
/// recurrence) to a scenario, producing the full ordered trajectory of
/// `time_steps + 1` samples.
///
/// # Contract
///
/// - Validates the configuration and scenario before producing anything
/// - Fails fast: an `Err` means no samples were produced
/// - Deterministic: identical inputs produce bit-identical trajectories
/// - Runs to completion; each generator owns its scalar state and shares
///   nothing with other generators
///
/// # Implementing a New Generator
///
/// ```rust
/// use oscil_rs::physics::{Sample, Trajectory};
/// use oscil_rs::solver::{Integrator, Scenario, SolverError, StepConfiguration};
///
/// /// Generator that holds the oscillator frozen at its initial state
/// struct FrozenSolver;
///
/// impl Integrator for FrozenSolver {
///     fn integrate(
///         &self,
///         scenario: &Scenario,
///         config: &StepConfiguration,
///     ) -> Result<Trajectory, SolverError> {
///         config.validate()?;
///         scenario.validate()?;
///
///         let initial = scenario.initial;
///         let mut trajectory = Trajectory::with_capacity(config.time_steps);
///         for step in 0..=config.time_steps {
///             trajectory.push(Sample::from_state(
///                 &scenario.oscillator,
///                 config.time_at(step),
///                 initial.position,
///                 initial.velocity,
///             ));
///         }
///         Ok(trajectory)
///     }
///
///     fn name(&self) -> &str {
///         "Frozen"
///     }
/// }
/// ```
pub trait Integrator {
    /// Run the generator to completion
    ///
    /// # Arguments
    ///
    /// * `scenario` - WHAT to integrate (oscillator + initial conditions)
    /// * `config` - HOW to step it (step count + step size)
    ///
    /// # Errors
    ///
    /// [`SolverError`] on invalid parameters or non-finite state; no
    /// partial trajectory is returned.
    fn integrate(
        &self,
        scenario: &Scenario,
        config: &StepConfiguration,
    ) -> Result<Trajectory, SolverError>;

    /// Name of the generator (used for display and plot legends)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_total_time() {
        let config = StepConfiguration::new(100, 0.25);
        assert_eq!(config.time_steps, 100);
        assert_eq!(config.total_time(), 25.0);
    }

    #[test]
    fn test_time_at_is_direct() {
        let config = StepConfiguration::new(1000, 0.1);

        // 0.1 is not exactly representable; direct indexing keeps the
        // final time within machine epsilon of n·dt.
        assert!((config.time_at(1000) - 100.0).abs() < 1e-12);
        assert_eq!(config.time_at(0), 0.0);
    }

    #[test]
    fn test_zero_steps_is_valid() {
        assert!(StepConfiguration::new(0, 0.25).validate().is_ok());
    }

    #[test]
    fn test_zero_dt_rejected() {
        let result = StepConfiguration::new(10, 0.0).validate();
        assert_eq!(result, Err(SolverError::InvalidStepSize(0.0)));
    }

    #[test]
    fn test_non_finite_dt_rejected() {
        assert!(StepConfiguration::new(10, f64::NAN).validate().is_err());
        assert!(StepConfiguration::new(10, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_negative_dt_accepted() {
        // Backwards integration is well defined
        assert!(StepConfiguration::new(10, -0.25).validate().is_ok());
    }

    #[test]
    fn test_domain_error_converts() {
        use crate::physics::DomainError;

        let error: SolverError = DomainError::NonPositiveMass(-1.0).into();
        assert!(error.to_string().contains("Mass must be positive"));
    }
}

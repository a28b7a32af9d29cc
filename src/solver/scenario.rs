//! Simulation scenario definition
//!
//! A scenario combines the oscillator model with its initial conditions.

use crate::physics::{DomainError, HarmonicOscillator, InitialConditions};

/// Simulation scenario
///
/// Defines a specific case to integrate:
/// - Oscillator model (equations)
/// - Initial conditions (state at t = 0)
///
/// # Design
///
/// The same scenario can be run with different generators. This is the
/// "WHAT to solve" (not "HOW to solve" — that is [`StepConfiguration`]
/// plus the chosen [`Integrator`]).
///
/// [`StepConfiguration`]: crate::solver::StepConfiguration
/// [`Integrator`]: crate::solver::Integrator
///
/// # Examples
///
/// ```rust
/// use oscil_rs::physics::{HarmonicOscillator, InitialConditions};
/// use oscil_rs::solver::Scenario;
///
/// let scenario = Scenario::new(
///     HarmonicOscillator::unit(),
///     InitialConditions::new(0.0, 1.0),
/// );
///
/// assert!(scenario.validate().is_ok());
/// assert_eq!(scenario.initial_energy(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Oscillator model (equations)
    pub oscillator: HarmonicOscillator,

    /// Initial state at t = 0
    pub initial: InitialConditions,
}

impl Scenario {
    /// Create a scenario
    pub fn new(oscillator: HarmonicOscillator, initial: InitialConditions) -> Self {
        Self { oscillator, initial }
    }

    /// The classic comparison case: k = m = 1, x0 = 0, v0 = 1
    ///
    /// With these values ω = 1, the amplitude parameter is 1, the phase
    /// shift is 0, and the exact total energy is 0.5 at every instant.
    pub fn classic() -> Self {
        Self::new(HarmonicOscillator::unit(), InitialConditions::new(0.0, 1.0))
    }

    /// Verify scenario content (finiteness of the initial state)
    ///
    /// The oscillator parameters were already validated at construction;
    /// the v0 ≠ 0 requirement is analytical-solver specific and checked
    /// there.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.initial.validate()
    }

    /// Exact total energy of the initial state
    pub fn initial_energy(&self) -> f64 {
        self.oscillator
            .energy(self.initial.position, self.initial.velocity)
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_creation() {
        let scenario = Scenario::new(
            HarmonicOscillator::new(2.0, 0.5).unwrap(),
            InitialConditions::new(1.0, 0.0),
        );

        assert_eq!(scenario.oscillator.omega(), 2.0);
        assert_eq!(scenario.initial.position, 1.0);
    }

    #[test]
    fn test_classic_scenario() {
        let scenario = Scenario::classic();

        assert_eq!(scenario.oscillator.omega(), 1.0);
        assert_eq!(scenario.initial_energy(), 0.5);
    }

    #[test]
    fn test_validate_rejects_non_finite_initial_state() {
        let scenario = Scenario::new(
            HarmonicOscillator::unit(),
            InitialConditions::new(f64::NAN, 1.0),
        );

        assert!(scenario.validate().is_err());
    }
}

//! Trajectory generators
//!
//! This module provides the trait and implementations for the three
//! generators. A generator applies a generation scheme (closed-form
//! evaluation or a numerical recurrence) to the oscillator model within
//! a specific scenario.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The solver architecture separates concerns into three layers:
//!
//! 1. **Scenario** ([`Scenario`]) - WHAT to solve
//!    - Oscillator model (equations)
//!    - Initial conditions (state at t = 0)
//!
//! 2. **Configuration** ([`StepConfiguration`]) - HOW to step it
//!    - Step count and step size
//!
//! 3. **Generator** ([`Integrator`] trait) - The scheme
//!    - Applies closed-form evaluation or a recurrence
//!    - Returns the complete trajectory
//!
//! This separation allows:
//! - The same scenario to be run by all three generators
//! - The compare demo to drive the generators uniformly
//! - Easy benchmarking and scheme comparison
//!
//! # Available Generators
//!
//! - **[`AnalyticalSolver`]**: closed-form solution, a pure function of
//!   the step index with no recurrence, hence no accumulated error. The
//!   reference the numerical schemes are measured against.
//! - **[`EulerSolver`]**: explicit first-order scheme. Its velocity
//!   update deliberately uses the stale force from the step start, which
//!   produces the systematic energy drift the comparison illustrates.
//! - **[`VerletSolver`]**: position-Verlet recurrence with averaged-force
//!   velocity correction, bootstrapped by one Euler transition. Shows the
//!   bounded energy behavior symplectic schemes are known for.
//!
//! # Quick Start Example
//!
//! ```rust
//! use oscil_rs::solver::{EulerSolver, Integrator, Scenario, StepConfiguration};
//!
//! // 1. Create scenario (WHAT to solve)
//! let scenario = Scenario::classic();
//!
//! // 2. Create configuration (HOW to step it)
//! let config = StepConfiguration::new(100, 0.25);
//!
//! // 3. Run a generator
//! let trajectory = EulerSolver::new().integrate(&scenario, &config)?;
//!
//! // 4. Access results: n + 1 samples
//! assert_eq!(trajectory.len(), 101);
//! # Ok::<(), oscil_rs::solver::SolverError>(())
//! ```
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────────┐
//! │ Oscillator Model │  (equations)
//! └────────┬─────────┘
//!          │
//! ┌────────▼────────┐
//! │ Scenario        │ ← WHAT to solve
//! │ (model + x0,v0) │
//! └────────┬────────┘
//!          │
//! ┌────────▼───────────┐
//! │ Step Configuration │ ← HOW to step it
//! │ (n steps, dt)      │
//! └────────┬───────────┘
//!          │
//! ┌────────▼─────────────────────┐
//! │ Generator                    │ ← The scheme
//! │ (Analytical, Euler, Verlet)  │
//! └────────┬─────────────────────┘
//!          │
//! ┌────────▼─────────────────┐
//! │ Trajectory               │ ← The solution
//! │ (n + 1 ordered samples)  │
//! └──────────────────────────┘
//! ```
//!
//! # Error Handling
//!
//! All generators return `Result<Trajectory, SolverError>`:
//!
//! ```rust
//! use oscil_rs::physics::{HarmonicOscillator, InitialConditions};
//! use oscil_rs::solver::{AnalyticalSolver, Integrator, Scenario, StepConfiguration};
//!
//! // v0 = 0 makes the phase shift undefined, so the analytical generator
//! // fails fast with a domain error and produces no trajectory.
//! let scenario = Scenario::new(
//!     HarmonicOscillator::unit(),
//!     InitialConditions::new(1.0, 0.0),
//! );
//! let config = StepConfiguration::new(10, 0.25);
//!
//! let result = AnalyticalSolver::new().integrate(&scenario, &config);
//! assert!(result.is_err());
//! ```
//!
//! Common errors:
//! - Invalid physical parameters (non-positive mass or spring constant,
//!   zero initial velocity for the analytical scheme)
//! - Invalid configuration (zero or non-finite step size)
//! - Numerical blow-up (NaN/Inf state detected between steps)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Integrator, SolverError, StepConfiguration};

pub use scenario::Scenario;

pub use methods::{AnalyticalSolver, EulerSolver, VerletSolver};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::physics::Sample;

/// Validate a freshly produced sample for numerical issues
///
/// Checks that the sample does not contain NaN or Inf values, which would
/// indicate numerical instability or overflow in the recurrence.
///
/// # Arguments
///
/// * `sample` - Sample to validate
/// * `step` - Step index that produced it (for error reporting)
///
/// # Returns
///
/// `Ok(())` when every component is finite, `Err` with the offending step
/// otherwise.
pub(crate) fn validate_sample(sample: &Sample, step: usize) -> Result<(), SolverError> {
    if !sample.is_finite() {
        return Err(SolverError::NonFiniteState { step });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

//! Undamped one-dimensional harmonic oscillator model
//!
//! This model encapsulates the physics of the system:
//! - Restoring force F(x) = -k·x
//! - Total mechanical energy E(x, v) = ½kx² + ½mv²
//! - Angular frequency ω = √(k/m)
//!
//! The model provides the "physics" (equations), the solvers in
//! [`crate::solver`] provide the "numerics" (method to integrate them).
//!
//! # Example
//!
//! ```rust
//! use oscil_rs::physics::{HarmonicOscillator, InitialConditions};
//!
//! // Unit oscillator: k = 1 N/m, m = 1 kg
//! let oscillator = HarmonicOscillator::new(1.0, 1.0).unwrap();
//!
//! assert_eq!(oscillator.force(0.5), -0.5);
//! assert_eq!(oscillator.energy(0.0, 1.0), 0.5);
//! assert_eq!(oscillator.omega(), 1.0);
//!
//! // Released from rest is valid for the stepping solvers,
//! // the analytical solver additionally requires v0 != 0.
//! let initial = InitialConditions::new(0.0, 1.0);
//! assert_eq!(initial.velocity, 1.0);
//! ```

use thiserror::Error;

// =================================================================================================
// Domain Errors
// =================================================================================================

/// Invalid physical parameters
///
/// Raised when a model or initial condition cannot describe a physical
/// oscillator. Generators fail fast on these: no partial trajectory is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Spring constant must be strictly positive
    #[error("Spring constant must be positive, got {0}")]
    NonPositiveSpringConstant(f64),

    /// Mass must be strictly positive
    #[error("Mass must be positive, got {0}")]
    NonPositiveMass(f64),

    /// Phase shift φ = atan(x0·ω/v0) is undefined for v0 = 0
    #[error("Initial velocity must be nonzero: phase shift atan(x0*omega/v0) is undefined")]
    ZeroInitialVelocity,

    /// Initial position/velocity must be finite numbers
    #[error("Initial conditions must be finite, got position {position} and velocity {velocity}")]
    NonFiniteInitialCondition { position: f64, velocity: f64 },
}

// =================================================================================================
// Harmonic Oscillator Model
// =================================================================================================

/// Undamped 1-D harmonic oscillator
///
/// Holds the two physical constants of the system. Immutable for the
/// duration of a run; set once at start.
///
/// # Physical Background
///
/// A point mass `m` attached to an ideal spring of stiffness `k`
/// experiences the restoring force F = -k·x. The resulting motion is
/// simple harmonic with angular frequency ω = √(k/m), and the total
/// mechanical energy
///
/// ```text
/// E = ½·k·x² + ½·m·v²
/// ```
///
/// is conserved by the exact dynamics. Numerical integrators only
/// approximately conserve it — that drift is precisely what this crate
/// measures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicOscillator {
    /// Spring constant k \[N/m\]
    spring_constant: f64,
    /// Oscillator mass m \[kg\]
    mass: f64,
}

impl HarmonicOscillator {
    /// Create a new oscillator model
    ///
    /// # Arguments
    ///
    /// * `spring_constant` - Spring stiffness k \[N/m\], must be > 0
    /// * `mass` - Oscillator mass m \[kg\], must be > 0
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when either parameter is non-positive or
    /// non-finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oscil_rs::physics::HarmonicOscillator;
    ///
    /// let oscillator = HarmonicOscillator::new(2.0, 0.5).unwrap();
    /// assert_eq!(oscillator.omega(), 2.0);
    ///
    /// assert!(HarmonicOscillator::new(-1.0, 1.0).is_err());
    /// ```
    pub fn new(spring_constant: f64, mass: f64) -> Result<Self, DomainError> {
        if !(spring_constant > 0.0) || !spring_constant.is_finite() {
            return Err(DomainError::NonPositiveSpringConstant(spring_constant));
        }
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(DomainError::NonPositiveMass(mass));
        }

        Ok(Self { spring_constant, mass })
    }

    /// Unit oscillator (k = 1, m = 1), the configuration used by the
    /// original comparison study
    pub fn unit() -> Self {
        Self { spring_constant: 1.0, mass: 1.0 }
    }

    /// Spring constant k \[N/m\]
    pub fn spring_constant(&self) -> f64 {
        self.spring_constant
    }

    /// Mass m \[kg\]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Restoring force F(x) = -k·x \[N\]
    #[inline]
    pub fn force(&self, position: f64) -> f64 {
        -self.spring_constant * position
    }

    /// Total mechanical energy E(x, v) = ½kx² + ½mv² \[J\]
    #[inline]
    pub fn energy(&self, position: f64, velocity: f64) -> f64 {
        0.5 * self.spring_constant * position * position + 0.5 * self.mass * velocity * velocity
    }

    /// Angular frequency ω = √(k/m) \[rad/s\]
    #[inline]
    pub fn omega(&self) -> f64 {
        (self.spring_constant / self.mass).sqrt()
    }

    /// Momentum p = m·v \[kg·m/s\], the phase-space ordinate
    #[inline]
    pub fn momentum(&self, velocity: f64) -> f64 {
        self.mass * velocity
    }
}

// =================================================================================================
// Initial Conditions
// =================================================================================================

/// Initial state (x0, v0) of a simulation run
///
/// Plain data: validation happens in [`Scenario::validate`]
/// (finiteness) and in the analytical solver (v0 ≠ 0 for the phase
/// shift).
///
/// [`Scenario::validate`]: crate::solver::Scenario::validate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    /// Initial position x0 \[m\]
    pub position: f64,
    /// Initial velocity v0 \[m/s\]
    pub velocity: f64,
}

impl InitialConditions {
    /// Create initial conditions
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Validate that both components are finite
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.position.is_finite() || !self.velocity.is_finite() {
            return Err(DomainError::NonFiniteInitialCondition {
                position: self.position,
                velocity: self.velocity,
            });
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Oscillator physics
//!
//! This module provides the physical model of the system and the data
//! records a simulation produces.
//!
//! # Core Concepts
//!
//! - **Harmonic Oscillator**: the model — spring constant, mass, and the
//!   equations derived from them (restoring force, energy, frequency)
//! - **Sample**: one (time, position, velocity, energy) record
//! - **Trajectory**: the ordered, owned sequence of samples from one run
//!
//! # Architecture
//!
//! The physical model is **separate from the numerical solvers**:
//! - The model provides the **equations** (physics)
//! - The solver provides the **method** to integrate them (numerics)
//!
//! This separation allows the same oscillator to be integrated with the
//! analytical, Euler, and Verlet generators and the outputs compared
//! sample for sample.
//!
//! # Example
//!
//! ```rust
//! use oscil_rs::physics::{HarmonicOscillator, Sample};
//!
//! let oscillator = HarmonicOscillator::new(1.0, 1.0).unwrap();
//!
//! // Energy invariant: computed from a sample's own position/velocity
//! let sample = Sample::from_state(&oscillator, 0.0, 0.0, 1.0);
//! assert_eq!(sample.energy, oscillator.energy(sample.position, sample.velocity));
//! ```

// module declaration
pub mod oscillator;
pub mod sample;
pub mod trajectory;

// re-export commonly used types for convenience
pub use oscillator::{DomainError, HarmonicOscillator, InitialConditions};
pub use sample::Sample;
pub use trajectory::Trajectory;

//! Generation schemes
//!
//! This module contains the concrete implementations of the
//! [`Integrator`](crate::solver::Integrator) trait.
//!
//! # Architecture
//!
//! The separation between the abstract generator interface
//! (`solver::traits`) and the concrete schemes (`solver::methods`)
//! follows the Open-Closed Principle:
//! - **Open** for extension: add new schemes without modifying existing code
//! - **Closed** for modification: the `Integrator` trait is stable
//!
//! # Available Schemes
//!
//! - **[`AnalyticalSolver`]**: closed-form reference solution
//!   - Exact: each sample is a pure function of the step index
//!   - Requires v0 ≠ 0 (phase shift convention)
//!
//! - **[`EulerSolver`]**: explicit Euler
//!   - Order: first-order O(dt)
//!   - Energy: systematic drift (the study's negative exhibit)
//!
//! - **[`VerletSolver`]**: velocity Verlet with Euler bootstrap
//!   - Order: second-order in position
//!   - Energy: bounded oscillation (the study's positive exhibit)
//!
//! # Example
//!
//! ```rust
//! use oscil_rs::solver::{
//!     AnalyticalSolver, EulerSolver, Integrator, Scenario, StepConfiguration, VerletSolver,
//! };
//!
//! let scenario = Scenario::classic();
//! let config = StepConfiguration::new(100, 0.25);
//!
//! // The compare study drives all three schemes uniformly
//! let generators: Vec<Box<dyn Integrator>> = vec![
//!     Box::new(AnalyticalSolver::new()),
//!     Box::new(EulerSolver::new()),
//!     Box::new(VerletSolver::new()),
//! ];
//!
//! for generator in &generators {
//!     let trajectory = generator.integrate(&scenario, &config)?;
//!     assert_eq!(trajectory.len(), 101);
//! }
//! # Ok::<(), oscil_rs::solver::SolverError>(())
//! ```

pub mod analytical;
pub mod euler;
mod verlet;

// Re-exports for convenience
pub use analytical::AnalyticalSolver;
pub use euler::EulerSolver;
pub use verlet::VerletSolver;

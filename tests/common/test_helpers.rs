//! Helper functions for integration tests

use oscil_rs::physics::Trajectory;
use oscil_rs::solver::{
    AnalyticalSolver, EulerSolver, Integrator, StepConfiguration, VerletSolver,
};

/// The three generators under study, in the order the plots use
pub fn all_generators() -> Vec<(&'static str, Box<dyn Integrator>)> {
    vec![
        ("Analytical", Box::new(AnalyticalSolver::new())),
        ("Euler", Box::new(EulerSolver::new())),
        ("Verlet", Box::new(VerletSolver::new())),
    ]
}

/// The classic comparison configuration: 100 steps of 0.25 s
pub fn classic_config() -> StepConfiguration {
    StepConfiguration::new(100, 0.25)
}

/// Largest |E - reference| over a whole trajectory
pub fn max_energy_deviation(trajectory: &Trajectory, reference: f64) -> f64 {
    trajectory
        .iter()
        .map(|sample| (sample.energy - reference).abs())
        .fold(0.0_f64, f64::max)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}

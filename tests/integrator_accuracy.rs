//! Energy behavior tests for the numerical generators
//!
//! These tests verify the comparative property the study exists to show:
//! Euler's systematic first-order energy drift against Verlet's bounded
//! near-conservation, with the analytical solution as the exact baseline.

use approx::assert_relative_eq;

use oscil_rs::solver::{
    AnalyticalSolver, EulerSolver, Integrator, Scenario, StepConfiguration, VerletSolver,
};

mod common;
use common::{classic_config, max_energy_deviation};

#[test]
fn test_euler_drift_regression_baseline() {
    // k = m = 1, x0 = 0, v0 = 1, dt = 0.25, n = 100.
    // Regression baseline, computed once and pinned: the total energy
    // grows from 0.5 to 10.463303243361878, a ratio of ≈ 20.93.
    let trajectory = EulerSolver::new()
        .integrate(&Scenario::classic(), &classic_config())
        .unwrap();

    let initial = trajectory.first().unwrap().energy;
    let last = trajectory.last().unwrap().energy;

    assert_eq!(initial, 0.5);
    assert_relative_eq!(last, 10.463303243361878, max_relative = 1e-12);

    // The drift is nonzero and far beyond any rounding tolerance
    assert!((last - initial).abs() > 1e-3);
}

#[test]
fn test_verlet_near_conservation_baseline() {
    // Same run with Verlet: final energy 0.5317035597566553, and the
    // deviation from the exact 0.5 stays below 0.032 at every step.
    let trajectory = VerletSolver::new()
        .integrate(&Scenario::classic(), &classic_config())
        .unwrap();

    let last = trajectory.last().unwrap().energy;
    assert_relative_eq!(last, 0.5317035597566553, max_relative = 1e-12);

    assert!(max_energy_deviation(&trajectory, 0.5) < 0.032);
}

#[test]
fn test_verlet_drifts_less_than_euler() {
    // The headline comparison: over the same run, Verlet's final energy
    // deviation must be strictly smaller than Euler's.
    let scenario = Scenario::classic();
    let config = classic_config();

    let euler = EulerSolver::new().integrate(&scenario, &config).unwrap();
    let verlet = VerletSolver::new().integrate(&scenario, &config).unwrap();

    let euler_drift = euler.energy_drift().abs();
    let verlet_drift = verlet.energy_drift().abs();

    assert!(
        verlet_drift < euler_drift,
        "Verlet drift {} should be below Euler drift {}",
        verlet_drift,
        euler_drift
    );

    // And not marginally: two orders of magnitude on this run
    assert!(verlet_drift * 100.0 < euler_drift);
}

#[test]
fn test_analytical_energy_is_flat() {
    let trajectory = AnalyticalSolver::new()
        .integrate(&Scenario::classic(), &classic_config())
        .unwrap();

    assert!(max_energy_deviation(&trajectory, 0.5) < 1e-12);
}

#[test]
fn test_euler_drift_shrinks_with_step_size() {
    // First-order scheme: refining dt reduces the drift over the same
    // total time (25 s). Computed baselines:
    //   dt = 0.25   → |ΔE| ≈ 9.963
    //   dt = 0.125  → |ΔE| ≈ 1.845
    //   dt = 0.0625 → |ΔE| ≈ 0.586
    let scenario = Scenario::classic();
    let euler = EulerSolver::new();

    let configurations = [
        StepConfiguration::new(100, 0.25),
        StepConfiguration::new(200, 0.125),
        StepConfiguration::new(400, 0.0625),
    ];

    let mut drifts = Vec::new();
    for config in &configurations {
        let trajectory = euler.integrate(&scenario, config).unwrap();
        drifts.push(trajectory.energy_drift().abs());
    }

    for i in 0..drifts.len() - 1 {
        assert!(
            drifts[i + 1] < drifts[i],
            "drift {} at finer dt should be below {}",
            drifts[i + 1],
            drifts[i]
        );
    }
}

#[test]
fn test_verlet_tracks_analytical_position() {
    // Second-order scheme: over one period the Verlet positions stay
    // close to the exact solution while Euler visibly departs.
    let scenario = Scenario::classic();
    let config = StepConfiguration::new(25, 0.25); // ~one period (2π ≈ 6.28)

    let exact = AnalyticalSolver::new()
        .integrate(&scenario, &config)
        .unwrap();
    let verlet = VerletSolver::new().integrate(&scenario, &config).unwrap();
    let euler = EulerSolver::new().integrate(&scenario, &config).unwrap();

    let verlet_error: f64 = exact
        .iter()
        .zip(verlet.iter())
        .map(|(a, b)| (a.position - b.position).abs())
        .fold(0.0, f64::max);

    let euler_error: f64 = exact
        .iter()
        .zip(euler.iter())
        .map(|(a, b)| (a.position - b.position).abs())
        .fold(0.0, f64::max);

    assert!(
        verlet_error < euler_error,
        "Verlet max position error {} should be below Euler's {}",
        verlet_error,
        euler_error
    );
}

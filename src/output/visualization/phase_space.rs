//! Phase-space and energy plots for trajectory comparison
//!
//! This module renders precomputed trajectories; it never computes
//! anything itself. The generators produce the trajectories, the plots
//! only project and draw them.
//!
//! # Available functions
//!
//! - [`plot_phase_space`]        — (position, momentum) portrait, one curve
//!   per trajectory, the view the original comparison animates
//! - [`plot_energy_comparison`]  — total energy vs time, the drift metric
//!   made visible
//!
//! # Usage
//!
//! ```rust,ignore
//! use oscil_rs::output::{plot_phase_space, plot_energy_comparison};
//!
//! let datasets = vec![
//!     ("Analytical", &analytical, 1.0),
//!     ("Euler",      &euler,      1.0),
//!     ("Verlet",     &verlet,     1.0),
//! ];
//! plot_phase_space(datasets, "phase_evolution.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::physics::Trajectory;

// =================================================================================================
// Public API
// =================================================================================================

/// Plot trajectories as phase-space portraits (position vs momentum)
///
/// Each trajectory is projected to (x, p = m·v) pairs and drawn as one
/// curve. Axis ranges are symmetric around the origin and sized to the
/// data, so the exact solution appears as the expected closed ellipse,
/// the Euler run as an outward spiral, and the Verlet run as a slightly
/// wobbling closed orbit.
///
/// # Arguments
///
/// * `datasets`    — Vec of `(label, trajectory, mass)`; the mass turns
///   velocity into momentum for that trajectory
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if `datasets` is empty or the backend cannot write to
/// `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// let datasets = vec![("Euler", &euler_trajectory, 1.0)];
/// plot_phase_space(datasets, "euler.png", None)?;
/// ```
pub fn plot_phase_space(
    datasets: Vec<(&str, &Trajectory, f64)>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if datasets.is_empty() {
        return Err("No trajectories provided".into());
    }

    let default_config = PlotConfig::phase_space(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // Project all trajectories up-front
    let all_data: Vec<(&str, Vec<(f64, f64)>)> = datasets
        .iter()
        .map(|(label, trajectory, mass)| (*label, trajectory.phase_points(*mass)))
        .collect();

    // Symmetric range covering every point of every curve
    let extent = all_data
        .iter()
        .flat_map(|(_, points)| points.iter())
        .map(|(x, p)| x.abs().max(p.abs()))
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10)
        * 1.1;

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_phase_space_impl(backend, &all_data, config, extent)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_phase_space_impl(backend, &all_data, config, extent)
        }
    }
}

/// Plot total energy vs time for several trajectories on the same axes
///
/// The energy axis starts at zero so the drift is read against the
/// physical baseline: a horizontal line for the analytical run, growth
/// for Euler, a tight band for Verlet.
///
/// # Arguments
///
/// * `datasets`    — Vec of `(label, trajectory)`
/// * `output_path` — Output file path (`.png` or `.svg`)
/// * `config`      — Optional plot configuration
///
/// # Errors
///
/// Returns `Err` if `datasets` is empty or the backend fails.
pub fn plot_energy_comparison(
    datasets: Vec<(&str, &Trajectory)>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if datasets.is_empty() {
        return Err("No trajectories provided".into());
    }

    let default_config = PlotConfig::energy(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_time = datasets
        .iter()
        .filter_map(|(_, trajectory)| trajectory.last())
        .map(|sample| sample.time)
        .fold(0.0_f64, f64::max);

    let max_energy = datasets
        .iter()
        .flat_map(|(_, trajectory)| trajectory.iter())
        .map(|sample| sample.energy)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_energy_impl(backend, &datasets, config, max_time, max_energy)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_energy_impl(backend, &datasets, config, max_time, max_energy)
        }
    }
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Render phase-space curves with the given drawing backend
fn plot_phase_space_impl<DB: DrawingBackend>(
    backend: DB,
    datasets: &[(&str, Vec<(f64, f64)>)],
    config: &PlotConfig,
    extent: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|p| format!("{:.1}", p))
            .draw()?;
    }

    for (idx, (label, points)) in datasets.iter().enumerate() {
        let color = config.get_series_color(idx);

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render energy-vs-time curves with the given drawing backend
fn plot_energy_impl<DB: DrawingBackend>(
    backend: DB,
    datasets: &[(&str, &Trajectory)],
    config: &PlotConfig,
    max_time: f64,
    max_energy: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_time, 0.0..(max_energy * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|t| format!("{:.0}", t))
            .y_label_formatter(&|e| format!("{:.2}", e))
            .draw()?;
    }

    for (idx, (label, trajectory)) in datasets.iter().enumerate() {
        let color = config.get_series_color(idx);

        chart
            .draw_series(LineSeries::new(
                trajectory.iter().map(|sample| (sample.time, sample.energy)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

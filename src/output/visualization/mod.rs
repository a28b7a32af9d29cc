//! Trajectory visualization
//!
//! Plotting functions for comparing generator output, built on plotters.
//! Both functions accept `.png` (bitmap) and `.svg` (vector) output
//! paths, selected by file extension.
//!
//! - [`plot_phase_space`] — (position, momentum) portraits, one curve per
//!   trajectory
//! - [`plot_energy_comparison`] — total energy vs time overlays
//! - [`PlotConfig`] — shared appearance configuration

mod config;
mod phase_space;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use phase_space::{plot_energy_comparison, plot_phase_space};

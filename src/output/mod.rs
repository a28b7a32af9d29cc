//! Output module for simulation results
//!
//! This module provides the boundary collaborators that consume computed
//! trajectories:
//! - **Report**: fixed-width console table with a surfacing frequency
//! - **Visualization**: PNG/SVG plots using plotters
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── report.rs           ← Console table
//! └── visualization/      ← Plots and graphics
//!     ├── mod.rs
//!     ├── config.rs
//!     └── phase_space.rs
//! ```
//!
//! # Design Philosophy
//!
//! The core generators only expose trajectories; everything here is a
//! consumer. The report's frequency filter selects which samples are
//! *surfaced* — the generators always compute all of them. Rendering,
//! frame pacing, and file export concerns stay on this side of the
//! boundary.
//!
//! # Quick Start
//!
//! ## Console report
//!
//! ```rust,ignore
//! use oscil_rs::output::print_report;
//!
//! // Surface every 10th sample
//! print_report(&trajectory, 10)?;
//! ```
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use oscil_rs::output::plot_phase_space;
//!
//! plot_phase_space(vec![("Euler", &trajectory, 1.0)], "output.png", None)?;
//! ```

pub mod report;
pub mod visualization;

// Re-export commonly used items for convenience
pub use report::{print_report, write_report};

pub use visualization::{
    plot_energy_comparison, plot_phase_space, IntoOptionalTitle, PlotConfig, NO_TITLE,
};

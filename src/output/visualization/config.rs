//! Plot configuration shared across visualization functions
//!
//! This module defines the common configuration structure used by both
//! the phase-space portrait and the energy comparison plot.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `series_colors`: Optional colors, one per trajectory
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use oscil_rs::output::PlotConfig;
///
/// let mut config = PlotConfig::phase_space("Classic Comparison");
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: auto-set by plot type)
    pub ylabel: String,

    /// Optional colors, one per plotted trajectory
    ///
    /// If None, uses the default palette: [BLUE, RED, GREEN, MAGENTA, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(), // Set by specific plot type
            ylabel: String::new(),
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (the default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::phase_space(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for phase-space portraits with optional custom title
    ///
    /// Sets the axes to position vs momentum and the title to the custom
    /// value or "Phase Space Evolution".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oscil_rs::output::PlotConfig;
    ///
    /// let config = PlotConfig::phase_space("Euler vs Verlet");
    /// assert_eq!(config.xlabel, "Particle Position x");
    ///
    /// // With default title
    /// let config = PlotConfig::phase_space(None::<&str>);
    /// assert_eq!(config.title, "Phase Space Evolution");
    /// ```
    pub fn phase_space(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Particle Position x".to_string();
        config.ylabel = "Particle Momentum p".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Phase Space Evolution".to_string());
        config
    }

    /// Create config for energy-vs-time plots with optional custom title
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oscil_rs::output::PlotConfig;
    ///
    /// let config = PlotConfig::energy(None::<&str>);
    /// assert_eq!(config.xlabel, "Time (s)");
    /// assert_eq!(config.title, "Total Energy Evolution");
    /// ```
    pub fn energy(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Time (s)".to_string();
        config.ylabel = "Total Energy E".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Total Energy Evolution".to_string());
        config
    }

    /// Create config with custom series colors
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use plotters::prelude::*;
    ///
    /// let config = PlotConfig::series_colors(vec![BLUE, RED, GREEN]);
    /// ```
    pub fn series_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.series_colors = Some(colors);
        config
    }

    /// Get color for the series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to the
    /// default palette. The palette order matches the original study:
    /// analytical blue, Euler red, Verlet green.
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if series_index < colors.len() {
                return colors[series_index];
            }
        }

        // Default palette
        let default_colors = vec![
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
    }

    #[test]
    fn test_phase_space_config_default_title() {
        let config = PlotConfig::phase_space(NO_TITLE);
        assert_eq!(config.xlabel, "Particle Position x");
        assert_eq!(config.ylabel, "Particle Momentum p");
        assert_eq!(config.title, "Phase Space Evolution");
    }

    #[test]
    fn test_phase_space_config_with_str() {
        let config = PlotConfig::phase_space("Classic Run");
        assert_eq!(config.title, "Classic Run");
    }

    #[test]
    fn test_energy_config_with_string() {
        let title = format!("Energy: {}", "Euler");
        let config = PlotConfig::energy(title);
        assert_eq!(config.xlabel, "Time (s)");
        assert_eq!(config.title, "Energy: Euler");
    }

    #[test]
    fn test_get_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), BLUE);
        assert_eq!(config.get_series_color(1), RED);
        assert_eq!(config.get_series_color(2), GREEN);
        assert_eq!(config.get_series_color(8), BLUE); // Wraparound
    }

    #[test]
    fn test_get_series_color_custom() {
        let config = PlotConfig::series_colors(vec![BLACK, CYAN]);
        assert_eq!(config.get_series_color(0), BLACK);
        assert_eq!(config.get_series_color(1), CYAN);
    }
}

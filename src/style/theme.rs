//! Predefined themes for plots.
//!
//! Themes are applied per-canvas at acquisition time; there is no
//! process-global style state.

use std::str::FromStr;

use super::color::Color;
use super::text_style::TextStyle;
use crate::error::PlotError;

/// Predefined plot themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default theme with white background
    #[default]
    Default,
    /// Dark theme with dark background
    Dark,
    /// Minimal theme with reduced visual elements
    Minimal,
    /// Seaborn-inspired theme (light gray plot area, white grid)
    Seaborn,
    /// High contrast theme for accessibility
    HighContrast,
}

impl FromStr for Theme {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Theme::Default),
            "dark" | "darkgrid" => Ok(Theme::Dark),
            "minimal" => Ok(Theme::Minimal),
            "seaborn" | "whitegrid" => Ok(Theme::Seaborn),
            "high-contrast" | "highcontrast" => Ok(Theme::HighContrast),
            other => Err(PlotError::InvalidConfig(format!(
                "unknown theme '{}'",
                other
            ))),
        }
    }
}

/// Theme configuration containing all style settings.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Background color for the figure
    pub background: Color,
    /// Background color for the plot area
    pub plot_background: Color,
    /// Color for axis lines
    pub axis_color: Color,
    /// Color for grid lines
    pub grid_color: Color,
    /// Grid line opacity
    pub grid_opacity: f64,
    /// Color for text
    pub text_color: Color,
    /// Default title style
    pub title_style: TextStyle,
    /// Default label style
    pub label_style: TextStyle,
    /// Default tick label style
    pub tick_style: TextStyle,
    /// Default line width
    pub line_width: f64,
    /// Axis line width
    pub axis_width: f64,
    /// Grid line width
    pub grid_width: f64,
}

impl Theme {
    /// Get the configuration for this theme.
    pub fn config(&self) -> ThemeConfig {
        match self {
            Theme::Default => ThemeConfig::default_theme(),
            Theme::Dark => ThemeConfig::dark_theme(),
            Theme::Minimal => ThemeConfig::minimal_theme(),
            Theme::Seaborn => ThemeConfig::seaborn_theme(),
            Theme::HighContrast => ThemeConfig::high_contrast_theme(),
        }
    }
}

impl ThemeConfig {
    fn default_theme() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            plot_background: Color::WHITE,
            axis_color: Color::BLACK,
            grid_color: Color::LIGHT_GRAY,
            grid_opacity: 0.8,
            text_color: Color::BLACK,
            title_style: TextStyle::new().font_size(14.0).bold().color(Color::BLACK),
            label_style: TextStyle::new().font_size(12.0).color(Color::BLACK),
            tick_style: TextStyle::new().font_size(10.0).color(Color::BLACK),
            line_width: 1.5,
            axis_width: 1.0,
            grid_width: 0.5,
        }
    }

    fn dark_theme() -> Self {
        let text_color = Color::rgb(220, 220, 220);
        ThemeConfig {
            background: Color::rgb(30, 30, 30),
            plot_background: Color::rgb(40, 40, 40),
            axis_color: Color::rgb(180, 180, 180),
            grid_color: Color::rgb(80, 80, 80),
            grid_opacity: 0.5,
            text_color: text_color.clone(),
            title_style: TextStyle::new()
                .font_size(14.0)
                .bold()
                .color(text_color.clone()),
            label_style: TextStyle::new().font_size(12.0).color(text_color.clone()),
            tick_style: TextStyle::new().font_size(10.0).color(text_color),
            line_width: 1.5,
            axis_width: 1.0,
            grid_width: 0.5,
        }
    }

    fn minimal_theme() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            plot_background: Color::WHITE,
            axis_color: Color::GRAY,
            grid_color: Color::LIGHT_GRAY,
            grid_opacity: 0.3,
            text_color: Color::DARK_GRAY,
            title_style: TextStyle::new().font_size(13.0).color(Color::DARK_GRAY),
            label_style: TextStyle::new().font_size(11.0).color(Color::GRAY),
            tick_style: TextStyle::new().font_size(9.0).color(Color::GRAY),
            line_width: 1.0,
            axis_width: 0.5,
            grid_width: 0.25,
        }
    }

    fn seaborn_theme() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            plot_background: Color::rgb(234, 234, 242),
            axis_color: Color::rgb(100, 100, 100),
            grid_color: Color::WHITE,
            grid_opacity: 1.0,
            text_color: Color::rgb(50, 50, 50),
            title_style: TextStyle::new()
                .font_size(14.0)
                .bold()
                .color(Color::rgb(50, 50, 50)),
            label_style: TextStyle::new().font_size(12.0).color(Color::rgb(50, 50, 50)),
            tick_style: TextStyle::new()
                .font_size(10.0)
                .color(Color::rgb(100, 100, 100)),
            line_width: 1.75,
            axis_width: 1.0,
            grid_width: 1.0,
        }
    }

    fn high_contrast_theme() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            plot_background: Color::WHITE,
            axis_color: Color::BLACK,
            grid_color: Color::BLACK,
            grid_opacity: 0.2,
            text_color: Color::BLACK,
            title_style: TextStyle::new().font_size(16.0).bold().color(Color::BLACK),
            label_style: TextStyle::new().font_size(14.0).bold().color(Color::BLACK),
            tick_style: TextStyle::new().font_size(12.0).color(Color::BLACK),
            line_width: 2.5,
            axis_width: 2.0,
            grid_width: 0.5,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::default_theme()
    }
}

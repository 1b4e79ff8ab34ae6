//! Grid configuration.

use crate::style::{Color, LineStyle};

/// Configuration for grid lines.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Whether the grid is visible
    pub visible: bool,
    /// Style for grid lines
    pub style: LineStyle,
    /// Whether to show X grid lines
    pub show_x: bool,
    /// Whether to show Y grid lines
    pub show_y: bool,
    /// Grid line opacity
    pub opacity: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            visible: true,
            style: LineStyle::new().color(Color::LIGHT_GRAY).width(0.5),
            show_x: true,
            show_y: true,
            opacity: 0.8,
        }
    }
}

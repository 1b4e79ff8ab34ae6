//! Axis configuration.

use crate::style::{Color, LineStyle, TextStyle};

/// Configuration for a single axis.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Whether the axis is visible
    pub visible: bool,
    /// Axis line style
    pub line_style: LineStyle,
    /// Whether to show tick marks
    pub show_ticks: bool,
    /// Length of tick marks in pixels
    pub tick_length: f64,
    /// Style for tick labels
    pub tick_label_style: TextStyle,
    /// Number of ticks to generate
    pub num_ticks: usize,
    /// Padding between tick marks and labels
    pub tick_padding: f64,
    /// Custom tick positions (overrides automatic generation)
    pub tick_positions: Option<Vec<f64>>,
    /// Custom tick labels (must match tick_positions length)
    pub tick_labels: Option<Vec<String>>,
}

impl AxisConfig {
    /// Set custom tick positions.
    pub fn set_ticks(&mut self, positions: Vec<f64>) {
        self.tick_positions = Some(positions);
    }

    /// Set custom tick labels. Used for categorical axes (bar charts label
    /// group centers with the first series' x-values).
    pub fn set_tick_labels(&mut self, labels: Vec<String>) {
        self.tick_labels = Some(labels);
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: f64) -> String {
        if value == 0.0 {
            "0".to_string()
        } else if value.abs() >= 1000.0 || value.abs() < 0.01 {
            format!("{:.2e}", value)
        } else if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            visible: true,
            line_style: LineStyle::new().color(Color::BLACK).width(1.0),
            show_ticks: true,
            tick_length: 5.0,
            tick_label_style: TextStyle::new().font_size(10.0),
            num_ticks: 5,
            tick_padding: 3.0,
            tick_positions: None,
            tick_labels: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_formatting_picks_sensible_precision() {
        let axis = AxisConfig::default();
        assert_eq!(axis.format_tick(0.0), "0");
        assert_eq!(axis.format_tick(3.0), "3");
        assert_eq!(axis.format_tick(2.5), "2.50");
        assert_eq!(axis.format_tick(12345.0), "1.23e4");
    }
}

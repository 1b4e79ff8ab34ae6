//! Line styling options.

use super::color::Color;

/// Dash pattern for lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashPattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line (default dash length)
    Dashed,
    /// Dotted line
    Dotted,
    /// Alternating dash-dot pattern
    DashDot,
    /// Custom dash array [dash_length, gap_length, ...]
    Custom(Vec<f64>),
}

impl DashPattern {
    /// Convert to SVG stroke-dasharray value.
    pub fn to_svg_dasharray(&self) -> Option<String> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some("8,4".to_string()),
            DashPattern::Dotted => Some("2,2".to_string()),
            DashPattern::DashDot => Some("8,4,2,4".to_string()),
            DashPattern::Custom(arr) => {
                if arr.is_empty() {
                    None
                } else {
                    Some(
                        arr.iter()
                            .map(|v| v.to_string())
                            .collect::<Vec<_>>()
                            .join(","),
                    )
                }
            }
        }
    }
}

/// Style configuration for stroked lines.
#[derive(Debug, Clone)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    /// Dash pattern
    pub dash: DashPattern,
    /// Opacity (0.0 - 1.0)
    pub opacity: f64,
}

impl LineStyle {
    /// Create a new line style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the line width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the dash pattern.
    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Generate SVG stroke attributes for a path-like element.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("fill=\"none\""),
            format!("stroke=\"{}\"", self.color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.width),
        ];

        if let Some(dasharray) = self.dash.to_svg_dasharray() {
            attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
        }

        if self.opacity < 1.0 {
            attrs.push(format!("stroke-opacity=\"{}\"", self.opacity));
        }

        attrs.join(" ")
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.5,
            dash: DashPattern::Solid,
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_lines_have_no_dasharray() {
        let style = LineStyle::new().color(Color::RED);
        assert!(!style.to_svg_style().contains("dasharray"));
    }

    #[test]
    fn dashed_lines_emit_dasharray() {
        let style = LineStyle::new().dash(DashPattern::Dashed);
        assert!(style.to_svg_style().contains("stroke-dasharray=\"8,4\""));
    }
}

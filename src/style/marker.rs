//! Marker styles for scatter plots and line plot points.

use super::color::Color;

/// Marker shapes for data points.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Marker {
    /// No marker
    None,
    /// Circle marker
    #[default]
    Circle,
    /// Square marker
    Square,
    /// Upward-pointing triangle
    Triangle,
    /// Diamond marker
    Diamond,
    /// Plus sign
    Plus,
    /// X/Cross marker
    Cross,
}

impl Marker {
    /// Generate SVG path data for the marker centered at origin.
    /// The size parameter is the radius (half the marker size).
    pub fn to_svg_path(&self, size: f64) -> Option<String> {
        match self {
            Marker::None => None,
            Marker::Circle => None, // Use <circle> element instead
            Marker::Square => {
                let s = size;
                Some(format!(
                    "M{},{} L{},{} L{},{} L{},{} Z",
                    -s, -s, s, -s, s, s, -s, s
                ))
            }
            Marker::Triangle => {
                let h = size * 1.1547;
                Some(format!("M0,{} L{},{} L{},{} Z", -h, -size, h * 0.5, size, h * 0.5))
            }
            Marker::Diamond => {
                let s = size * 1.2;
                Some(format!("M0,{} L{},0 L0,{} L{},0 Z", -s, s, s, -s))
            }
            Marker::Plus => {
                let s = size;
                let w = size * 0.3;
                Some(format!(
                    "M{},{} L{},{} L{},{} L{},{} L{},{} L{},{} L{},{} L{},{} L{},{} L{},{} L{},{} L{},{} Z",
                    -w, -s, w, -s, w, -w, s, -w, s, w, w, w, w, s, -w, s, -w, w, -s, w, -s, -w, -w, -w
                ))
            }
            Marker::Cross => {
                let s = size * 0.707;
                Some(format!(
                    "M{:.2},{:.2} L{:.2},{:.2} M{:.2},{:.2} L{:.2},{:.2}",
                    -s, -s, s, s, -s, s, s, -s
                ))
            }
        }
    }

    /// Check if this marker should be rendered as a circle element.
    pub fn is_circle(&self) -> bool {
        matches!(self, Marker::Circle)
    }
}

/// Style configuration for markers.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    /// The marker shape
    pub marker: Marker,
    /// Marker size (diameter in pixels)
    pub size: f64,
    /// Fill color
    pub fill: Color,
    /// Edge/stroke color
    pub edge_color: Color,
    /// Edge/stroke width
    pub edge_width: f64,
    /// Fill opacity
    pub fill_opacity: f64,
}

impl MarkerStyle {
    /// Create a new marker style.
    pub fn new(marker: Marker) -> Self {
        MarkerStyle {
            marker,
            ..Default::default()
        }
    }

    /// Set the marker size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the fill color.
    pub fn fill(mut self, color: impl Into<Color>) -> Self {
        self.fill = color.into();
        self
    }

    /// Set the edge color.
    pub fn edge_color(mut self, color: impl Into<Color>) -> Self {
        self.edge_color = color.into();
        self
    }

    /// Set the fill opacity.
    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("fill=\"{}\"", self.fill.to_svg_string()),
            format!("stroke=\"{}\"", self.edge_color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.edge_width),
        ];

        if self.fill_opacity < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", self.fill_opacity));
        }

        attrs.join(" ")
    }

    /// Render the marker at a specific position, returning SVG elements.
    pub fn render_at(&self, x: f64, y: f64) -> String {
        let style = self.to_svg_style();
        let radius = self.size / 2.0;

        if self.marker.is_circle() {
            format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>\n",
                x, y, radius, style
            )
        } else if let Some(path) = self.marker.to_svg_path(radius) {
            format!(
                "<path d=\"{}\" transform=\"translate({:.2},{:.2})\" {}/>\n",
                path, x, y, style
            )
        } else {
            String::new()
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            marker: Marker::Circle,
            size: 6.0,
            fill: Color::default(),
            edge_color: Color::default(),
            edge_width: 1.0,
            fill_opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_markers_render_as_circle_elements() {
        let style = MarkerStyle::default().size(8.0);
        let svg = style.render_at(10.0, 20.0);
        assert!(svg.contains("<circle"));
        assert!(svg.contains("r=\"4.00\""));
    }

    #[test]
    fn square_markers_render_as_paths() {
        let style = MarkerStyle::new(Marker::Square);
        assert!(style.render_at(0.0, 0.0).contains("<path"));
    }
}

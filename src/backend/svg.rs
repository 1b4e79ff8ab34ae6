//! SVG rendering backend.

use crate::element::text::escape_xml;
use crate::style::{FillStyle, LineStyle, TextStyle};

/// SVG rendering backend accumulating drawing primitives.
#[derive(Debug)]
pub struct SvgBackend {
    /// Image width in pixels
    pub width: f64,
    /// Image height in pixels
    pub height: f64,
    /// SVG content accumulated during rendering
    content: Vec<String>,
    /// SVG defs section (for clip paths, gradients, etc.)
    defs: Vec<String>,
}

impl SvgBackend {
    /// Create a new SVG backend with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            content: Vec::new(),
            defs: Vec::new(),
        }
    }

    /// Add raw SVG content.
    pub fn add_content(&mut self, content: String) {
        self.content.push(content);
    }

    /// Draw a line between two points.
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        self.content.push(format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            x1,
            y1,
            x2,
            y2,
            style.to_svg_style()
        ));
    }

    /// Draw a polyline.
    pub fn draw_polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        if points.is_empty() {
            return;
        }

        let points_str: String = points
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect::<Vec<_>>()
            .join(" ");

        self.content.push(format!(
            "<polyline points=\"{}\" {}/>",
            points_str,
            style.to_svg_style()
        ));
    }

    /// Draw a closed polygon.
    pub fn draw_polygon(&mut self, points: &[(f64, f64)], style: &FillStyle) {
        if points.is_empty() {
            return;
        }

        let points_str: String = points
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect::<Vec<_>>()
            .join(" ");

        self.content.push(format!(
            "<polygon points=\"{}\" {}/>",
            points_str,
            style.to_svg_style()
        ));
    }

    /// Draw a rectangle.
    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &FillStyle) {
        self.content.push(format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>",
            x,
            y,
            width,
            height,
            style.to_svg_style()
        ));
    }

    /// Draw a circle.
    pub fn draw_circle(&mut self, cx: f64, cy: f64, r: f64, style: &FillStyle) {
        self.content.push(format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>",
            cx,
            cy,
            r,
            style.to_svg_style()
        ));
    }

    /// Draw text.
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        let transform = if style.rotation != 0.0 {
            format!(" transform=\"rotate({},{:.2},{:.2})\"", style.rotation, x, y)
        } else {
            String::new()
        };

        self.content.push(format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" {}{}>{}</text>",
            x,
            y,
            style.anchor.to_svg_string(),
            style.to_svg_attrs(),
            transform,
            escape_xml(text)
        ));
    }

    /// Start a clip region; subsequent content is clipped to the rectangle.
    pub fn start_clip(&mut self, id: &str, x: f64, y: f64, width: f64, height: f64) {
        self.defs.push(format!(
            "<clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath>",
            id, x, y, width, height
        ));
        self.content.push(format!("<g clip-path=\"url(#{})\">", id));
    }

    /// End the current clip region.
    pub fn end_clip(&mut self) {
        self.content.push("</g>".to_string());
    }

    /// Render the final SVG document.
    pub fn render(self) -> String {
        let defs_section = if self.defs.is_empty() {
            String::new()
        } else {
            format!("  <defs>\n    {}\n  </defs>\n", self.defs.join("\n    "))
        };

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
{}{}
</svg>"#,
            self.width,
            self.height,
            self.width,
            self.height,
            defs_section,
            self.content.join("\n  ")
        )
    }
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn render_produces_a_complete_document() {
        let mut backend = SvgBackend::new(100.0, 50.0);
        backend.draw_line(0.0, 0.0, 10.0, 10.0, &LineStyle::new());
        let svg = backend.render();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("width=\"100\""));
        assert!(svg.contains("<line"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn text_is_escaped() {
        let mut backend = SvgBackend::new(10.0, 10.0);
        backend.draw_text(0.0, 0.0, "a<b", &TextStyle::new().color(Color::BLACK));
        assert!(backend.render().contains("a&lt;b"));
    }
}

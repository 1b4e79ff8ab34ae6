//! Scatter plot element.

use crate::element::Bounds;
use crate::plot::line::finite_bounds;
use crate::plot::{transform_point, Plot};
use crate::style::{Color, Marker, MarkerStyle};

/// A scatter plot showing individual data points.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    /// X coordinates
    pub x: Vec<f64>,
    /// Y coordinates
    pub y: Vec<f64>,
    /// Marker style
    pub marker_style: MarkerStyle,
    /// Label for legend
    pub label: Option<String>,
}

impl ScatterPlot {
    /// Create a new scatter plot from x and y data.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        ScatterPlot {
            x,
            y,
            marker_style: MarkerStyle::default(),
            label: None,
        }
    }

    /// Set the marker color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let c = color.into();
        self.marker_style.fill = c.clone();
        self.marker_style.edge_color = c;
        self
    }

    /// Set the marker type.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker_style.marker = marker;
        self
    }

    /// Set the marker size.
    pub fn size(mut self, size: f64) -> Self {
        self.marker_style.size = size;
        self
    }

    /// Set the label for the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Plot for ScatterPlot {
    fn bounds(&self) -> Option<Bounds> {
        finite_bounds(&self.x, &self.y)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        Some(self.marker_style.clone())
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let marker = &self.marker_style.marker;
        let radius = self.marker_style.size / 2.0;
        let style = self.marker_style.to_svg_style();

        // Circles share attributes through a group wrapper; other shapes
        // are emitted per-point.
        if marker.is_circle() {
            let mut svg = format!("<g {}>\n", style);
            for (&x, &y) in self.x.iter().zip(self.y.iter()) {
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                let (px, py) = transform_point(x, y, data_bounds, pixel_bounds);
                svg.push_str(&format!(
                    "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>\n",
                    px, py, radius
                ));
            }
            svg.push_str("</g>\n");
            return svg;
        }

        let mut svg = String::new();
        for (&x, &y) in self.x.iter().zip(self.y.iter()) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let (px, py) = transform_point(x, y, data_bounds, pixel_bounds);
            if let Some(path) = marker.to_svg_path(radius) {
                svg.push_str(&format!(
                    "<path d=\"{}\" transform=\"translate({:.2},{:.2})\" {}/>\n",
                    path, px, py, style
                ));
            }
        }

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_scatter_uses_a_shared_group() {
        let plot = ScatterPlot::new(vec![0.2, 0.8], vec![0.4, 0.6]).color(Color::GREEN);
        let svg = plot.render_svg(&Bounds::unit(), &Bounds::new(0.0, 100.0, 0.0, 100.0));
        assert!(svg.starts_with("<g "));
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn marker_size_controls_radius() {
        let plot = ScatterPlot::new(vec![0.5], vec![0.5]).size(10.0);
        let svg = plot.render_svg(&Bounds::unit(), &Bounds::new(0.0, 100.0, 0.0, 100.0));
        assert!(svg.contains("r=\"5.00\""));
    }
}

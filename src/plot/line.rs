//! Line plot element.

use crate::element::Bounds;
use crate::plot::{transform_point, Plot};
use crate::style::{Color, LineStyle, Marker, MarkerStyle};

/// A line plot connecting data points in order.
#[derive(Debug, Clone)]
pub struct LinePlot {
    /// X coordinates
    pub x: Vec<f64>,
    /// Y coordinates
    pub y: Vec<f64>,
    /// Line style
    pub line_style: LineStyle,
    /// Marker style (optional)
    pub marker_style: Option<MarkerStyle>,
    /// Label for legend
    pub label: Option<String>,
}

impl LinePlot {
    /// Create a new line plot from x and y data.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        LinePlot {
            x,
            y,
            line_style: LineStyle::default(),
            marker_style: None,
            label: None,
        }
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.line_style.color = color.into();
        if let Some(ref mut marker) = self.marker_style {
            marker.fill = self.line_style.color.clone();
            marker.edge_color = self.line_style.color.clone();
        }
        self
    }

    /// Set the line width.
    pub fn linewidth(mut self, width: f64) -> Self {
        self.line_style.width = width;
        self
    }

    /// Add markers to the line plot.
    pub fn marker(mut self, marker: Marker) -> Self {
        let color = self.line_style.color.clone();
        self.marker_style = Some(MarkerStyle {
            marker,
            fill: color.clone(),
            edge_color: color,
            ..Default::default()
        });
        self
    }

    /// Set the label for the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the complete line style.
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }
}

impl Plot for LinePlot {
    fn bounds(&self) -> Option<Bounds> {
        finite_bounds(&self.x, &self.y)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn line_style(&self) -> Option<LineStyle> {
        Some(self.line_style.clone())
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        self.marker_style.clone()
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let points: Vec<(f64, f64)> = self
            .x
            .iter()
            .zip(self.y.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| transform_point(x, y, data_bounds, pixel_bounds))
            .collect();

        if points.is_empty() {
            return String::new();
        }

        let mut svg = String::new();

        if points.len() >= 2 {
            let path_data: String = points
                .iter()
                .enumerate()
                .map(|(i, (x, y))| {
                    if i == 0 {
                        format!("M{:.2},{:.2}", x, y)
                    } else {
                        format!(" L{:.2},{:.2}", x, y)
                    }
                })
                .collect();

            svg.push_str(&format!(
                "<path d=\"{}\" {}/>\n",
                path_data,
                self.line_style.to_svg_style()
            ));
        }

        if let Some(ref marker_style) = self.marker_style {
            for (x, y) in &points {
                svg.push_str(&marker_style.render_at(*x, *y));
            }
        }

        svg
    }
}

/// Bounds over the finite points of a coordinate pair list.
pub(crate) fn finite_bounds(x: &[f64], y: &[f64]) -> Option<Bounds> {
    let mut bounds = Bounds::new(
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
    );

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        if xi.is_finite() && yi.is_finite() {
            bounds.include_point(xi, yi);
        }
    }

    if bounds.x_min.is_finite() && bounds.x_max.is_finite() {
        Some(bounds)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_skip_non_finite_points() {
        let plot = LinePlot::new(vec![1.0, f64::NAN, 3.0], vec![2.0, 5.0, 4.0]);
        let b = plot.bounds().unwrap();
        assert_eq!(b.x_min, 1.0);
        assert_eq!(b.x_max, 3.0);
        assert_eq!(b.y_max, 4.0);
    }

    #[test]
    fn render_emits_a_path() {
        let plot = LinePlot::new(vec![0.0, 1.0], vec![0.0, 1.0]).color(Color::RED);
        let svg = plot.render_svg(&Bounds::unit(), &Bounds::new(0.0, 100.0, 0.0, 100.0));
        assert!(svg.contains("<path"));
        assert!(svg.contains("rgb(255,0,0)"));
    }

    #[test]
    fn single_point_emits_no_path() {
        let plot = LinePlot::new(vec![0.5], vec![0.5]);
        let svg = plot.render_svg(&Bounds::unit(), &Bounds::new(0.0, 100.0, 0.0, 100.0));
        assert!(!svg.contains("<path"));
    }
}

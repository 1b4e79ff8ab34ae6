//! Bar plot element.
//!
//! Positions are bar centers along the x axis; bars rise from the zero
//! baseline (or hang from it for negative heights). Grouped layouts are
//! produced by the renderer offsetting each series' centers.

use crate::element::Bounds;
use crate::plot::{transform_point, Plot};
use crate::style::{Color, FillStyle};

/// A vertical bar series.
#[derive(Debug, Clone)]
pub struct BarPlot {
    /// Bar center positions along x
    pub positions: Vec<f64>,
    /// Bar heights (signed)
    pub heights: Vec<f64>,
    /// Bar width in data units
    pub width: f64,
    /// Fill style
    pub fill: FillStyle,
    /// Label for legend
    pub label: Option<String>,
}

impl BarPlot {
    /// Create a new bar series.
    pub fn new(positions: Vec<f64>, heights: Vec<f64>, width: f64) -> Self {
        BarPlot {
            positions,
            heights,
            width,
            fill: FillStyle::default(),
            label: None,
        }
    }

    /// Set the bar color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.fill = FillStyle::new(color);
        self
    }

    /// Set the label for the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Plot for BarPlot {
    fn bounds(&self) -> Option<Bounds> {
        if self.positions.is_empty() || self.heights.is_empty() {
            return None;
        }

        let mut bounds = Bounds::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        );

        let half = self.width / 2.0;
        for (&pos, &height) in self.positions.iter().zip(self.heights.iter()) {
            if !pos.is_finite() || !height.is_finite() {
                continue;
            }
            bounds.include_point(pos - half, 0.0);
            bounds.include_point(pos + half, height);
        }

        if bounds.x_min.is_finite() {
            Some(bounds)
        } else {
            None
        }
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn fill_style(&self) -> Option<FillStyle> {
        Some(self.fill.clone())
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let mut svg = String::new();
        let half = self.width / 2.0;
        let style = self.fill.to_svg_style();

        for (&pos, &height) in self.positions.iter().zip(self.heights.iter()) {
            if !pos.is_finite() || !height.is_finite() {
                continue;
            }

            let (left, base) = transform_point(pos - half, 0.0, data_bounds, pixel_bounds);
            let (right, top) = transform_point(pos + half, height, data_bounds, pixel_bounds);

            // SVG rects need a positive height; negative bars hang below
            // the baseline.
            let (y, h) = if top <= base {
                (top, base - top)
            } else {
                (base, top - base)
            };

            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
                left,
                y,
                right - left,
                h,
                style
            ));
        }

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_include_the_zero_baseline() {
        let plot = BarPlot::new(vec![0.0, 1.0, 2.0], vec![3.0, 5.0, 4.0], 0.2);
        let b = plot.bounds().unwrap();
        assert_eq!(b.y_min, 0.0);
        assert_eq!(b.y_max, 5.0);
        assert!((b.x_min - (-0.1)).abs() < 1e-12);
        assert!((b.x_max - 2.1).abs() < 1e-12);
    }

    #[test]
    fn negative_bars_extend_below_baseline() {
        let plot = BarPlot::new(vec![0.0], vec![-2.0], 0.5);
        let b = plot.bounds().unwrap();
        assert_eq!(b.y_min, -2.0);
        assert_eq!(b.y_max, 0.0);

        let svg = plot.render_svg(
            &Bounds::new(-1.0, 1.0, -3.0, 3.0),
            &Bounds::new(0.0, 100.0, 0.0, 100.0),
        );
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn one_rect_per_category() {
        let plot = BarPlot::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0], 0.2);
        let svg = plot.render_svg(
            &Bounds::new(-1.0, 3.0, 0.0, 4.0),
            &Bounds::new(0.0, 100.0, 0.0, 100.0),
        );
        assert_eq!(svg.matches("<rect").count(), 3);
    }
}

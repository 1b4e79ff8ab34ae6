//! 3D plot elements.
//!
//! Spatial elements hold data-space coordinates; the 3D axes owns the
//! projection and asks each element to render through it.

use crate::element::LegendEntry;
use crate::style::{Color, FillStyle, LineStyle, MarkerStyle};

/// Axis-aligned bounds in data space for 3D elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl Bounds3 {
    /// An empty bounds ready to absorb points.
    pub fn empty() -> Self {
        Bounds3 {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
            z_min: f64::INFINITY,
            z_max: f64::NEG_INFINITY,
        }
    }

    /// Whether any point has been absorbed.
    pub fn is_valid(&self) -> bool {
        self.x_min.is_finite() && self.y_min.is_finite() && self.z_min.is_finite()
    }

    /// Expand to include a point.
    pub fn include(&mut self, x: f64, y: f64, z: f64) {
        if x.is_finite() && y.is_finite() && z.is_finite() {
            self.x_min = self.x_min.min(x);
            self.x_max = self.x_max.max(x);
            self.y_min = self.y_min.min(y);
            self.y_max = self.y_max.max(y);
            self.z_min = self.z_min.min(z);
            self.z_max = self.z_max.max(z);
        }
    }

    /// Expand to include another bounds.
    pub fn include_bounds(&mut self, other: &Bounds3) {
        self.include(other.x_min, other.y_min, other.z_min);
        self.include(other.x_max, other.y_max, other.z_max);
    }
}

/// A 3D polyline.
#[derive(Debug, Clone)]
pub struct Line3Plot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub line_style: LineStyle,
    pub label: Option<String>,
}

impl Line3Plot {
    /// Create a new 3D line plot.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Line3Plot {
            x,
            y,
            z,
            line_style: LineStyle::default(),
            label: None,
        }
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.line_style.color = color.into();
        self
    }

    /// Set the label for the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Data-space bounds over finite points.
    pub fn bounds(&self) -> Bounds3 {
        let mut b = Bounds3::empty();
        for ((&x, &y), &z) in self.x.iter().zip(&self.y).zip(&self.z) {
            b.include(x, y, z);
        }
        b
    }

    /// Legend entry, if labeled.
    pub fn legend_entry(&self) -> Option<LegendEntry> {
        self.label
            .as_deref()
            .filter(|l| !l.is_empty())
            .map(|l| LegendEntry::new(l).line_style(self.line_style.clone()))
    }
}

/// A 3D point cloud.
#[derive(Debug, Clone)]
pub struct Scatter3Plot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub marker_style: MarkerStyle,
    pub label: Option<String>,
}

impl Scatter3Plot {
    /// Create a new 3D scatter plot.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Scatter3Plot {
            x,
            y,
            z,
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

    /// Data-space bounds over finite points.
    pub fn bounds(&self) -> Bounds3 {
        let mut b = Bounds3::empty();
        for ((&x, &y), &z) in self.x.iter().zip(&self.y).zip(&self.z) {
            b.include(x, y, z);
        }
        b
    }

    /// Legend entry, if labeled.
    pub fn legend_entry(&self) -> Option<LegendEntry> {
        self.label
            .as_deref()
            .filter(|l| !l.is_empty())
            .map(|l| LegendEntry::new(l).marker_style(self.marker_style.clone()))
    }
}

/// A set of volumetric bars: each bar rises from z = 0 at (x, y) with the
/// shared (dx, dy) footprint and its own height.
#[derive(Debug, Clone)]
pub struct Bar3Plot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub heights: Vec<f64>,
    /// Footprint along x and y
    pub extent: (f64, f64),
    pub fill: FillStyle,
    pub label: Option<String>,
}

impl Bar3Plot {
    /// Create a new volumetric bar series.
    pub fn new(x: Vec<f64>, y: Vec<f64>, heights: Vec<f64>, extent: (f64, f64)) -> Self {
        Bar3Plot {
            x,
            y,
            heights,
            extent,
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

    /// Data-space bounds: bases sit at z = 0, tops at each height.
    pub fn bounds(&self) -> Bounds3 {
        let (dx, dy) = self.extent;
        let mut b = Bounds3::empty();
        for ((&x, &y), &h) in self.x.iter().zip(&self.y).zip(&self.heights) {
            b.include(x, y, 0.0);
            b.include(x + dx, y + dy, h);
        }
        b
    }

    /// Legend entry, if labeled.
    pub fn legend_entry(&self) -> Option<LegendEntry> {
        self.label
            .as_deref()
            .filter(|l| !l.is_empty())
            .map(|l| LegendEntry::new(l).fill_style(self.fill.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds3_absorbs_points() {
        let mut b = Bounds3::empty();
        assert!(!b.is_valid());
        b.include(1.0, 2.0, 3.0);
        b.include(-1.0, 0.0, 5.0);
        assert!(b.is_valid());
        assert_eq!(b.x_min, -1.0);
        assert_eq!(b.z_max, 5.0);
    }

    #[test]
    fn bar3_bounds_include_base_plane() {
        let bars = Bar3Plot::new(vec![1.0], vec![1.0], vec![4.0], (0.1, 0.1));
        let b = bars.bounds();
        assert_eq!(b.z_min, 0.0);
        assert_eq!(b.z_max, 4.0);
    }

    #[test]
    fn unlabeled_elements_have_no_legend_entry() {
        let line = Line3Plot::new(vec![0.0], vec![0.0], vec![0.0]);
        assert!(line.legend_entry().is_none());
        assert!(line.label("L").legend_entry().is_some());
    }
}

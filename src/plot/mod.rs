//! Plot element types for visualizing data.

mod bar;
mod boxplot;
mod line;
mod scatter;
pub mod spatial;

pub use bar::BarPlot;
pub use boxplot::BoxPlot;
pub use line::LinePlot;
pub use scatter::ScatterPlot;
pub use spatial::{Bar3Plot, Line3Plot, Scatter3Plot};

use crate::element::{Bounds, LegendEntry};
use crate::style::{FillStyle, LineStyle, MarkerStyle};

/// Trait for 2D plot elements that can be rendered onto an axes.
pub trait Plot {
    /// Get the data bounds for this plot.
    fn bounds(&self) -> Option<Bounds>;

    /// Get the label for this plot (for legend).
    fn label(&self) -> Option<&str>;

    /// Get the line style for legend display.
    fn line_style(&self) -> Option<LineStyle> {
        None
    }

    /// Get the marker style for legend display.
    fn marker_style(&self) -> Option<MarkerStyle> {
        None
    }

    /// Get the fill style for legend display.
    fn fill_style(&self) -> Option<FillStyle> {
        None
    }

    /// Create a legend entry for this plot. Unlabeled plots get no entry.
    fn legend_entry(&self) -> Option<LegendEntry> {
        self.label().filter(|l| !l.is_empty()).map(|label| {
            let mut entry = LegendEntry::new(label);
            if let Some(style) = self.line_style() {
                entry = entry.line_style(style);
            }
            if let Some(style) = self.marker_style() {
                entry = entry.marker_style(style);
            }
            if let Some(style) = self.fill_style() {
                entry = entry.fill_style(style);
            }
            entry
        })
    }

    /// Render this plot to SVG, returning the SVG elements as a string.
    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String;
}

/// Transform a data point to pixel coordinates (SVG y grows downward).
pub(crate) fn transform_point(x: f64, y: f64, data: &Bounds, pixel: &Bounds) -> (f64, f64) {
    let x_norm = (x - data.x_min) / data.width();
    let y_norm = (y - data.y_min) / data.height();

    let px = pixel.x_min + x_norm * pixel.width();
    let py = pixel.y_max - y_norm * pixel.height();

    (px, py)
}

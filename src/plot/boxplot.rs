//! Box plot element.

use crate::element::Bounds;
use crate::plot::{transform_point, Plot};
use crate::stats::BoxStats;
use crate::style::{Color, FillStyle, LineStyle};

/// A single box-and-whisker glyph.
#[derive(Debug, Clone)]
pub struct BoxPlot {
    /// Box statistics (quartiles, whiskers, outliers)
    pub stats: BoxStats,
    /// Center position along x
    pub position: f64,
    /// Box width in data units
    pub width: f64,
    /// Box fill
    pub fill: FillStyle,
    /// Whisker/median stroke
    pub line: LineStyle,
    /// Label for legend
    pub label: Option<String>,
}

impl BoxPlot {
    /// Create a box plot glyph at the given x position.
    pub fn new(stats: BoxStats, position: f64, width: f64) -> Self {
        BoxPlot {
            stats,
            position,
            width,
            fill: FillStyle::default().opacity(0.7),
            line: LineStyle::new().color(Color::BLACK).width(1.0),
            label: None,
        }
    }

    /// Set the box fill color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let c = color.into();
        self.fill = FillStyle::new(c).opacity(0.7).stroke(Color::BLACK);
        self
    }

    /// Set the label for the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Plot for BoxPlot {
    fn bounds(&self) -> Option<Bounds> {
        let mut y_min = self.stats.whisker_low;
        let mut y_max = self.stats.whisker_high;
        for &o in &self.stats.outliers {
            y_min = y_min.min(o);
            y_max = y_max.max(o);
        }
        Some(Bounds::new(
            self.position - self.width,
            self.position + self.width,
            y_min,
            y_max,
        ))
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
        let cap = self.width / 4.0;
        let s = &self.stats;

        let px = |x: f64, y: f64| transform_point(x, y, data_bounds, pixel_bounds);

        // Box spanning the interquartile range
        let (left, q3_px) = px(self.position - half, s.q3);
        let (right, q1_px) = px(self.position + half, s.q1);
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
            left,
            q3_px,
            right - left,
            q1_px - q3_px,
            self.fill.to_svg_style()
        ));

        let line_style = self.line.to_svg_style();
        let mut stroke = |x1: f64, y1: f64, x2: f64, y2: f64| {
            let (px1, py1) = px(x1, y1);
            let (px2, py2) = px(x2, y2);
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                px1, py1, px2, py2, line_style
            ));
        };

        // Median
        stroke(self.position - half, s.median, self.position + half, s.median);
        // Whisker stems
        stroke(self.position, s.q3, self.position, s.whisker_high);
        stroke(self.position, s.q1, self.position, s.whisker_low);
        // Whisker caps
        stroke(
            self.position - cap,
            s.whisker_high,
            self.position + cap,
            s.whisker_high,
        );
        stroke(
            self.position - cap,
            s.whisker_low,
            self.position + cap,
            s.whisker_low,
        );

        // Outliers as open circles
        for &o in &s.outliers {
            let (cx, cy) = px(self.position, o);
            svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"2.50\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                cx,
                cy,
                self.line.color.to_svg_string()
            ));
        }

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::box_stats;

    fn sample_plot() -> BoxPlot {
        let stats = box_stats(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 30.0]).unwrap();
        BoxPlot::new(stats, 1.0, 0.5).color(Color::GREEN)
    }

    #[test]
    fn bounds_cover_whiskers_and_outliers() {
        let plot = sample_plot();
        let b = plot.bounds().unwrap();
        assert!(b.y_max >= 30.0);
        assert!(b.y_min <= plot.stats.whisker_low);
    }

    #[test]
    fn render_emits_box_median_and_whiskers() {
        let plot = sample_plot();
        let svg = plot.render_svg(
            &Bounds::new(0.0, 2.0, 0.0, 31.0),
            &Bounds::new(0.0, 100.0, 0.0, 100.0),
        );
        assert_eq!(svg.matches("<rect").count(), 1);
        // median + 2 stems + 2 caps
        assert_eq!(svg.matches("<line").count(), 5);
        // one outlier at 30.0
        assert_eq!(svg.matches("<circle").count(), 1);
    }
}

//! The 2D renderer set.
//!
//! Each renderer validates its input, resolves every series color up front
//! (so failures abort before anything is drawn), adds plot elements to the
//! axes, and applies the per-call decoration: axis labels with their font
//! sizes, grid, legend, and the optional equal-aspect constraint.

use log::debug;

use crate::axes::Axes;
use crate::config::StyleConfig;
use crate::error::{PlotError, PlotResult};
use crate::plot::{BarPlot, BoxPlot, LinePlot, ScatterPlot};
use crate::series::Series;
use crate::stats::{box_stats, histogram_bins, kernel_density};
use crate::style::{palette_color, Color};

/// Renders the 2D chart kinds.
pub(crate) struct PlanarCharts {
    /// Total width of one bar group in category units; each of `n` series
    /// gets `bar_group_width / n`.
    pub bar_group_width: f64,
}

impl Default for PlanarCharts {
    fn default() -> Self {
        PlanarCharts {
            bar_group_width: 0.35,
        }
    }
}

impl PlanarCharts {
    /// Resolve one color per series, in decode order, before any drawing.
    fn series_colors(series: &[Series], style: &StyleConfig) -> PlotResult<Vec<Color>> {
        (0..series.len())
            .map(|i| palette_color(i, &style.palette))
            .collect()
    }

    fn decorate(&self, axes: &mut Axes, style: &StyleConfig, legend: bool) {
        axes.set_xlabel(&style.x_label, style.x_label_size);
        axes.set_ylabel(&style.y_label, style.y_label_size);
        axes.grid.visible = true;
        if legend {
            axes.show_legend();
        }
    }

    /// Draw one line per series.
    pub fn line(&self, axes: &mut Axes, series: &[Series], style: &StyleConfig) -> PlotResult<()> {
        let colors = Self::series_colors(series, style)?;
        for (record, color) in series.iter().zip(colors) {
            axes.add_plot(Box::new(
                LinePlot::new(record.x.clone(), record.y.clone())
                    .color(color)
                    .label(&record.label),
            ));
        }
        self.decorate(axes, style, true);
        axes.equal_aspect = style.equal_aspect;
        Ok(())
    }

    /// Draw one point cloud per series.
    pub fn scatter(
        &self,
        axes: &mut Axes,
        series: &[Series],
        style: &StyleConfig,
    ) -> PlotResult<()> {
        let colors = Self::series_colors(series, style)?;
        for (record, color) in series.iter().zip(colors) {
            axes.add_plot(Box::new(
                ScatterPlot::new(record.x.clone(), record.y.clone())
                    .color(color)
                    .size(style.marker_size)
                    .label(&record.label),
            ));
        }
        self.decorate(axes, style, true);
        axes.equal_aspect = style.equal_aspect;
        Ok(())
    }

    /// Draw grouped bars: series index `i` of `n` is offset by
    /// `i * (group_width / n)` so same-category bars sit side by side; the
    /// first series' x-values become the category tick labels.
    pub fn bar(&self, axes: &mut Axes, series: &[Series], style: &StyleConfig) -> PlotResult<()> {
        if series.is_empty() {
            self.decorate(axes, style, true);
            return Ok(());
        }

        let colors = Self::series_colors(series, style)?;
        let categories = series[0].x.len();
        for record in series {
            if record.y.len() != categories {
                return Err(PlotError::LengthMismatch {
                    label: record.label.clone(),
                    expected: categories,
                    found: record.y.len(),
                });
            }
        }

        let n = series.len();
        let bar_width = self.bar_group_width / n as f64;
        debug!("bar layout: {} series x {} categories, width {}", n, categories, bar_width);

        for (i, (record, color)) in series.iter().zip(colors).enumerate() {
            let positions: Vec<f64> = (0..categories)
                .map(|c| c as f64 + i as f64 * bar_width)
                .collect();
            axes.add_plot(Box::new(
                BarPlot::new(positions, record.y.clone(), bar_width)
                    .color(color)
                    .label(&record.label),
            ));
        }

        // Tick each group center with the first series' x-value, treated
        // as a category label rather than a coordinate
        let centers: Vec<f64> = (0..categories)
            .map(|c| c as f64 + bar_width * (n - 1) as f64 / 2.0)
            .collect();
        let labels: Vec<String> = series[0].x.iter().map(|v| category_label(*v)).collect();
        axes.set_category_ticks(centers, labels);

        self.decorate(axes, style, true);
        axes.equal_aspect = style.equal_aspect;
        Ok(())
    }

    /// Bin a data collection and draw it as touching bars.
    pub fn histogram(
        &self,
        axes: &mut Axes,
        data: &[f64],
        style: &StyleConfig,
    ) -> PlotResult<()> {
        if style.bin_count == 0 {
            return Err(PlotError::InvalidConfig(
                "histogram bin count must be positive".to_string(),
            ));
        }
        let color = palette_color(0, &style.palette)?;

        let bins = histogram_bins(data, style.bin_count);
        if !bins.is_empty() {
            let width = bins[0].end - bins[0].start;
            let positions: Vec<f64> = bins.iter().map(|b| (b.start + b.end) / 2.0).collect();
            let heights: Vec<f64> = bins.iter().map(|b| b.count as f64).collect();
            axes.add_plot(Box::new(BarPlot::new(positions, heights, width).color(color)));
        }

        self.decorate(axes, style, false);
        Ok(())
    }

    /// Draw a box-and-whisker summary of a data collection.
    pub fn boxplot(&self, axes: &mut Axes, data: &[f64], style: &StyleConfig) -> PlotResult<()> {
        let color = palette_color(0, &style.palette)?;
        let stats = box_stats(data).ok_or_else(|| {
            PlotError::InvalidData("cannot draw a box plot of empty data".to_string())
        })?;

        axes.add_plot(Box::new(BoxPlot::new(stats, 1.0, 0.5).color(color)));
        self.decorate(axes, style, false);
        Ok(())
    }

    /// Draw a Gaussian kernel density estimate of a data collection.
    pub fn density(&self, axes: &mut Axes, data: &[f64], style: &StyleConfig) -> PlotResult<()> {
        let color = palette_color(0, &style.palette)?;
        let curve = kernel_density(data, 200);
        if curve.is_empty() {
            return Err(PlotError::InvalidData(
                "cannot estimate a density from fewer than two points".to_string(),
            ));
        }

        let (x, y): (Vec<f64>, Vec<f64>) = curve.into_iter().unzip();
        axes.add_plot(Box::new(LinePlot::new(x, y).color(color)));
        self.decorate(axes, style, false);
        Ok(())
    }
}

/// Format a numeric category value the way it was written: integers stay
/// integers.
fn category_label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlotOptions, PlotterDefaults};
    use crate::style::Theme;

    fn style() -> StyleConfig {
        let (style, _) = PlotOptions::new().resolve(&PlotterDefaults::default());
        style
    }

    fn axes() -> Axes {
        Axes::new(Theme::Default.config())
    }

    #[test]
    fn line_adds_one_plot_per_series() {
        let charts = PlanarCharts::default();
        let mut axes = axes();
        let series = vec![
            Series::xy(vec![1.0, 2.0], vec![1.0, 4.0], "a"),
            Series::xy(vec![1.0, 2.0], vec![2.0, 3.0], "b"),
        ];
        charts.line(&mut axes, &series, &style()).unwrap();
        assert_eq!(axes.plot_count(), 2);
        assert_eq!(axes.legend.as_ref().unwrap().entries.len(), 2);
    }

    #[test]
    fn empty_palette_aborts_before_drawing() {
        let charts = PlanarCharts::default();
        let mut axes = axes();
        let (empty, _) =
            PlotOptions::new().palette(vec![]).resolve(&PlotterDefaults::default());
        let series = vec![Series::xy(vec![1.0], vec![1.0], "a")];
        let err = charts.line(&mut axes, &series, &empty).unwrap_err();
        assert!(matches!(err, PlotError::EmptyPalette));
        assert_eq!(axes.plot_count(), 0);
    }

    #[test]
    fn bar_offsets_follow_series_index() {
        let charts = PlanarCharts::default();
        let n = 2;
        let bar_width = charts.bar_group_width / n as f64;
        // Series 0 sits on the category index, series 1 one bar over
        assert_eq!(0.0 * bar_width, 0.0);
        assert!((1.0 * bar_width - 0.175).abs() < 1e-12);

        let mut axes = axes();
        let series = vec![
            Series::xy(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0], "a"),
            Series::xy(vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0], "b"),
        ];
        charts.bar(&mut axes, &series, &style()).unwrap();
        assert_eq!(axes.plot_count(), 2);
        // Category ticks come from the first series' x-values
        assert_eq!(
            axes.x_axis.tick_labels.as_deref(),
            Some(&["1".to_string(), "2".to_string(), "3".to_string()][..])
        );
        // Tick positions are centered across the group
        let positions = axes.x_axis.tick_positions.as_ref().unwrap();
        assert!((positions[0] - bar_width / 2.0).abs() < 1e-12);
    }

    #[test]
    fn bar_rejects_misaligned_series() {
        let charts = PlanarCharts::default();
        let mut axes = axes();
        let series = vec![
            Series::xy(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0], "a"),
            Series::xy(vec![1.0, 2.0, 3.0], vec![3.0, 2.0], "short"),
        ];
        let err = charts.bar(&mut axes, &series, &style()).unwrap_err();
        match err {
            PlotError::LengthMismatch {
                label,
                expected,
                found,
            } => {
                assert_eq!(label, "short");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
        // Nothing was drawn
        assert_eq!(axes.plot_count(), 0);
    }

    #[test]
    fn histogram_draws_one_bar_series() {
        let charts = PlanarCharts::default();
        let mut axes = axes();
        let data: Vec<f64> = (0..50).map(|i| i as f64 * 0.1).collect();
        charts.histogram(&mut axes, &data, &style()).unwrap();
        assert_eq!(axes.plot_count(), 1);
    }

    #[test]
    fn histogram_rejects_zero_bins() {
        let charts = PlanarCharts::default();
        let mut axes = axes();
        let (zero_bins, _) =
            PlotOptions::new().bin_count(0).resolve(&PlotterDefaults::default());
        assert!(charts.histogram(&mut axes, &[1.0], &zero_bins).is_err());
    }

    #[test]
    fn boxplot_of_empty_data_fails() {
        let charts = PlanarCharts::default();
        let mut axes = axes();
        assert!(matches!(
            charts.boxplot(&mut axes, &[], &style()),
            Err(PlotError::InvalidData(_))
        ));
    }

    #[test]
    fn density_draws_a_curve() {
        let charts = PlanarCharts::default();
        let mut axes = axes();
        let data: Vec<f64> = (0..40).map(|i| (i % 7) as f64).collect();
        charts.density(&mut axes, &data, &style()).unwrap();
        assert_eq!(axes.plot_count(), 1);
    }

    #[test]
    fn category_labels_preserve_integers() {
        assert_eq!(category_label(3.0), "3");
        assert_eq!(category_label(2.5), "2.5");
    }
}

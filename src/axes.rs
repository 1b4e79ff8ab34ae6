//! 2D axes: plot container, decoration, and the render pass.

use crate::backend::SvgBackend;
use crate::element::{AxisConfig, Bounds, GridConfig, Legend, LegendEntry, Text};
use crate::plot::Plot;
use crate::scale::LinearScale;
use crate::style::{TextAnchor, ThemeConfig};

/// An axes object representing a single 2D plot area.
pub struct Axes {
    /// Position within the figure (normalized coordinates)
    pub position: Bounds,
    /// X-axis scale
    x_scale: LinearScale,
    /// Y-axis scale
    y_scale: LinearScale,
    /// Plots contained in this axes
    plots: Vec<Box<dyn Plot>>,
    /// X-axis label
    pub x_label: Option<Text>,
    /// Y-axis label
    pub y_label: Option<Text>,
    /// Legend configuration
    pub legend: Option<Legend>,
    /// Grid configuration
    pub grid: GridConfig,
    /// X-axis configuration
    pub x_axis: AxisConfig,
    /// Y-axis configuration
    pub y_axis: AxisConfig,
    /// Data bounds (computed from plots)
    data_bounds: Option<Bounds>,
    /// Force equal data units per pixel on both axes
    pub equal_aspect: bool,
    /// Theme configuration
    pub theme: ThemeConfig,
}

impl Axes {
    /// Create a new axes with default settings.
    pub fn new(theme: ThemeConfig) -> Self {
        let mut grid = GridConfig::default();
        grid.style.color = theme.grid_color.clone();
        grid.style.width = theme.grid_width;
        grid.opacity = theme.grid_opacity;

        let mut x_axis = AxisConfig::default();
        x_axis.line_style.color = theme.axis_color.clone();
        x_axis.line_style.width = theme.axis_width;
        x_axis.tick_label_style = theme.tick_style.clone();

        let mut y_axis = AxisConfig::default();
        y_axis.line_style.color = theme.axis_color.clone();
        y_axis.line_style.width = theme.axis_width;
        y_axis.tick_label_style = theme.tick_style.clone();

        Axes {
            position: Bounds::new(0.09, 0.97, 0.1, 0.95),
            x_scale: LinearScale::auto(),
            y_scale: LinearScale::auto(),
            plots: Vec::new(),
            x_label: None,
            y_label: None,
            legend: None,
            grid,
            x_axis,
            y_axis,
            data_bounds: None,
            equal_aspect: false,
            theme,
        }
    }

    /// Set the x-axis label with an explicit font size.
    pub fn set_xlabel(&mut self, label: impl Into<String>, font_size: f64) {
        let style = self.theme.label_style.clone().font_size(font_size);
        self.x_label = Some(Text::new(label, 0.0, 0.0).style(style));
    }

    /// Set the y-axis label with an explicit font size.
    pub fn set_ylabel(&mut self, label: impl Into<String>, font_size: f64) {
        let style = self.theme.label_style.clone().font_size(font_size);
        self.y_label = Some(Text::new(label, 0.0, 0.0).style(style));
    }

    /// Show the legend (created lazily as labeled plots arrive).
    pub fn show_legend(&mut self) {
        let legend = self.legend.get_or_insert_with(Legend::new);
        legend.visible = true;
        legend.text_style = self.theme.tick_style.clone();
    }

    /// Replace automatic ticks on the x axis with category labels at the
    /// given positions.
    pub fn set_category_ticks(&mut self, positions: Vec<f64>, labels: Vec<String>) {
        self.x_axis.set_ticks(positions);
        self.x_axis.set_tick_labels(labels);
    }

    /// Add a plot to this axes.
    pub fn add_plot(&mut self, plot: Box<dyn Plot>) {
        if let Some(plot_bounds) = plot.bounds() {
            if let Some(ref mut bounds) = self.data_bounds {
                bounds.include_bounds(&plot_bounds);
            } else {
                self.data_bounds = Some(plot_bounds);
            }
        }

        if let Some(entry) = plot.legend_entry() {
            self.add_legend_entry(entry);
        }

        self.plots.push(plot);
    }

    fn add_legend_entry(&mut self, entry: LegendEntry) {
        let legend = self.legend.get_or_insert_with(|| {
            let mut l = Legend::new();
            l.visible = false;
            l
        });
        legend.add_entry(entry);
    }

    /// Number of plots on this axes.
    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    /// The data bounds used for rendering, after degenerate-range padding
    /// and the optional equal-aspect correction.
    fn render_bounds(&self, pixel_bounds: &Bounds) -> Bounds {
        let mut bounds = self.data_bounds.unwrap_or_default();

        if bounds.width() == 0.0 {
            bounds.x_min -= 0.5;
            bounds.x_max += 0.5;
        }
        if bounds.height() == 0.0 {
            bounds.y_min -= 0.5;
            bounds.y_max += 0.5;
        }

        let mut bounds = bounds.pad(0.05);

        if self.equal_aspect {
            // Expand the denser axis so both map the same data units per
            // pixel.
            let sx = bounds.width() / pixel_bounds.width();
            let sy = bounds.height() / pixel_bounds.height();
            let scale = sx.max(sy);
            let (cx, cy) = bounds.center();
            let half_w = scale * pixel_bounds.width() / 2.0;
            let half_h = scale * pixel_bounds.height() / 2.0;
            bounds = Bounds::new(cx - half_w, cx + half_w, cy - half_h, cy + half_h);
        }

        bounds
    }

    /// Render this axes into the backend.
    pub fn render(&mut self, backend: &mut SvgBackend) {
        let pixel_bounds = Bounds::new(
            self.position.x_min * backend.width,
            self.position.x_max * backend.width,
            (1.0 - self.position.y_max) * backend.height,
            (1.0 - self.position.y_min) * backend.height,
        );

        let data_bounds = self.render_bounds(&pixel_bounds);
        self.x_scale.set_range(data_bounds.x_min, data_bounds.x_max);
        self.y_scale.set_range(data_bounds.y_min, data_bounds.y_max);

        // Plot area background
        backend.draw_rect(
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height(),
            &self.theme.plot_background.clone().into(),
        );

        if self.grid.visible {
            self.render_grid(backend, &pixel_bounds);
        }

        // Plots, clipped to the plot area
        let clip_id = format!(
            "plot-clip-{:.0}-{:.0}",
            pixel_bounds.x_min, pixel_bounds.y_min
        );
        backend.start_clip(
            &clip_id,
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height(),
        );
        for plot in &self.plots {
            backend.add_content(plot.render_svg(&data_bounds, &pixel_bounds));
        }
        backend.end_clip();

        self.render_axis_lines(backend, &pixel_bounds);

        if let Some(ref label) = self.x_label {
            let x = (pixel_bounds.x_min + pixel_bounds.x_max) / 2.0;
            let y = pixel_bounds.y_max + 38.0;
            backend.add_content(label.clone().at(x, y, TextAnchor::Middle).to_svg());
        }

        if let Some(ref label) = self.y_label {
            let x = pixel_bounds.x_min - 45.0;
            let y = (pixel_bounds.y_min + pixel_bounds.y_max) / 2.0;
            let mut text = label.clone().at(x, y, TextAnchor::Middle);
            text.style.rotation = -90.0;
            backend.add_content(text.to_svg());
        }

        if let Some(ref legend) = self.legend {
            if legend.visible && !legend.entries.is_empty() {
                render_legend(backend, legend, &pixel_bounds);
            }
        }
    }

    fn render_grid(&self, backend: &mut SvgBackend, pixel_bounds: &Bounds) {
        let mut style = self.grid.style.clone();
        style.opacity = self.grid.opacity;

        if self.grid.show_x {
            for tick in self.x_tick_positions() {
                let x_norm = self.x_scale.transform(tick);
                if !(0.0..=1.0).contains(&x_norm) {
                    continue;
                }
                let px = pixel_bounds.x_min + x_norm * pixel_bounds.width();
                backend.draw_line(px, pixel_bounds.y_min, px, pixel_bounds.y_max, &style);
            }
        }

        if self.grid.show_y {
            for tick in self.y_scale.ticks(self.y_axis.num_ticks) {
                let y_norm = self.y_scale.transform(tick);
                let py = pixel_bounds.y_max - y_norm * pixel_bounds.height();
                backend.draw_line(pixel_bounds.x_min, py, pixel_bounds.x_max, py, &style);
            }
        }
    }

    fn x_tick_positions(&self) -> Vec<f64> {
        match self.x_axis.tick_positions {
            Some(ref positions) => positions.clone(),
            None => self.x_scale.ticks(self.x_axis.num_ticks),
        }
    }

    fn render_axis_lines(&self, backend: &mut SvgBackend, pixel_bounds: &Bounds) {
        // X axis
        if self.x_axis.visible {
            backend.draw_line(
                pixel_bounds.x_min,
                pixel_bounds.y_max,
                pixel_bounds.x_max,
                pixel_bounds.y_max,
                &self.x_axis.line_style,
            );

            if self.x_axis.show_ticks {
                let positions = self.x_tick_positions();
                let labels: Vec<String> = match self.x_axis.tick_labels {
                    Some(ref custom) => custom.clone(),
                    None => positions
                        .iter()
                        .map(|t| self.x_axis.format_tick(*t))
                        .collect(),
                };

                let mut label_style = self.x_axis.tick_label_style.clone();
                label_style.anchor = TextAnchor::Middle;

                for (tick, label) in positions.iter().zip(labels.iter()) {
                    let x_norm = self.x_scale.transform(*tick);
                    if !(0.0..=1.0).contains(&x_norm) {
                        continue;
                    }
                    let px = pixel_bounds.x_min + x_norm * pixel_bounds.width();

                    backend.draw_line(
                        px,
                        pixel_bounds.y_max,
                        px,
                        pixel_bounds.y_max + self.x_axis.tick_length,
                        &self.x_axis.line_style,
                    );
                    backend.draw_text(
                        px,
                        pixel_bounds.y_max
                            + self.x_axis.tick_length
                            + self.x_axis.tick_padding
                            + 10.0,
                        label,
                        &label_style,
                    );
                }
            }
        }

        // Y axis
        if self.y_axis.visible {
            backend.draw_line(
                pixel_bounds.x_min,
                pixel_bounds.y_min,
                pixel_bounds.x_min,
                pixel_bounds.y_max,
                &self.y_axis.line_style,
            );

            if self.y_axis.show_ticks {
                let mut label_style = self.y_axis.tick_label_style.clone();
                label_style.anchor = TextAnchor::End;

                for tick in self.y_scale.ticks(self.y_axis.num_ticks) {
                    let y_norm = self.y_scale.transform(tick);
                    let py = pixel_bounds.y_max - y_norm * pixel_bounds.height();

                    backend.draw_line(
                        pixel_bounds.x_min - self.y_axis.tick_length,
                        py,
                        pixel_bounds.x_min,
                        py,
                        &self.y_axis.line_style,
                    );
                    backend.draw_text(
                        pixel_bounds.x_min - self.y_axis.tick_length - self.y_axis.tick_padding,
                        py + 3.0,
                        &self.y_axis.format_tick(tick),
                        &label_style,
                    );
                }
            }
        }
    }

}

/// Render a legend box into the given pixel bounds. Shared by the 2D and
/// 3D axes.
pub(crate) fn render_legend(backend: &mut SvgBackend, legend: &Legend, pixel_bounds: &Bounds) {
    let line_height = legend.text_style.font_size * 1.5;
    let legend_height = legend.entries.len() as f64 * line_height + legend.padding * 2.0;
    let legend_width = 110.0 + legend.padding * 2.0;

    let lx = if legend.position.is_left() {
        pixel_bounds.x_min + 5.0
    } else {
        pixel_bounds.x_max - legend_width - 5.0
    };
    let ly = if legend.position.is_top() {
        pixel_bounds.y_min + 5.0
    } else {
        pixel_bounds.y_max - legend_height - 5.0
    };

    backend.draw_rect(lx, ly, legend_width, legend_height, &legend.background);

    for (i, entry) in legend.entries.iter().enumerate() {
        let ey = ly + legend.padding + (i as f64 + 0.5) * line_height;
        let line_x1 = lx + legend.padding;
        let line_x2 = lx + legend.padding + legend.line_length;
        let line_mid = (line_x1 + line_x2) / 2.0;

        if let Some(ref line_style) = entry.line_style {
            backend.draw_line(line_x1, ey, line_x2, ey, line_style);
        }

        if let Some(ref fill_style) = entry.fill_style {
            if entry.line_style.is_none() && entry.marker_style.is_none() {
                let rect_size = 10.0;
                backend.draw_rect(
                    line_mid - rect_size / 2.0,
                    ey - rect_size / 2.0,
                    rect_size,
                    rect_size,
                    fill_style,
                );
            }
        }

        if let Some(ref marker_style) = entry.marker_style {
            backend.add_content(marker_style.render_at(line_mid, ey));
        }

        let mut text_style = legend.text_style.clone();
        text_style.anchor = TextAnchor::Start;
        backend.draw_text(
            lx + legend.padding + legend.line_length + legend.label_gap,
            ey + 3.0,
            &entry.label,
            &text_style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::LinePlot;
    use crate::style::Theme;

    fn render_to_string(axes: &mut Axes) -> String {
        let mut backend = SvgBackend::new(400.0, 300.0);
        axes.render(&mut backend);
        backend.render()
    }

    #[test]
    fn adding_plots_grows_data_bounds() {
        let mut axes = Axes::new(Theme::Default.config());
        axes.add_plot(Box::new(LinePlot::new(vec![0.0, 1.0], vec![0.0, 2.0])));
        axes.add_plot(Box::new(LinePlot::new(vec![5.0, 6.0], vec![-1.0, 1.0])));
        assert_eq!(axes.plot_count(), 2);
        let b = axes.data_bounds.unwrap();
        assert_eq!(b.x_max, 6.0);
        assert_eq!(b.y_min, -1.0);
    }

    #[test]
    fn labeled_plots_accumulate_legend_entries() {
        let mut axes = Axes::new(Theme::Default.config());
        axes.add_plot(Box::new(
            LinePlot::new(vec![0.0, 1.0], vec![0.0, 1.0]).label("a"),
        ));
        axes.add_plot(Box::new(
            LinePlot::new(vec![0.0, 1.0], vec![1.0, 0.0]).label("b"),
        ));
        let legend = axes.legend.as_ref().unwrap();
        assert_eq!(legend.entries.len(), 2);
        // Legend stays hidden until requested
        assert!(!legend.visible);
        axes.show_legend();
        assert!(axes.legend.as_ref().unwrap().visible);
    }

    #[test]
    fn render_contains_labels_and_plot() {
        let mut axes = Axes::new(Theme::Default.config());
        axes.add_plot(Box::new(
            LinePlot::new(vec![0.0, 1.0], vec![0.0, 1.0]).label("trend"),
        ));
        axes.set_xlabel("time", 12.0);
        axes.set_ylabel("value", 12.0);
        axes.show_legend();
        let svg = render_to_string(&mut axes);
        assert!(svg.contains("time"));
        assert!(svg.contains("value"));
        assert!(svg.contains("trend"));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn equal_aspect_equalizes_units_per_pixel() {
        let mut axes = Axes::new(Theme::Default.config());
        axes.add_plot(Box::new(LinePlot::new(vec![0.0, 10.0], vec![0.0, 1.0])));
        axes.equal_aspect = true;
        let pixel_bounds = Bounds::new(0.0, 200.0, 0.0, 100.0);
        let bounds = axes.render_bounds(&pixel_bounds);
        let sx = bounds.width() / pixel_bounds.width();
        let sy = bounds.height() / pixel_bounds.height();
        assert!((sx - sy).abs() < 1e-9);
    }

    #[test]
    fn category_ticks_replace_numeric_labels() {
        let mut axes = Axes::new(Theme::Default.config());
        axes.add_plot(Box::new(LinePlot::new(vec![0.0, 2.0], vec![0.0, 4.0])));
        axes.set_category_ticks(vec![0.0, 1.0, 2.0], vec!["a".into(), "b".into(), "c".into()]);
        let svg = render_to_string(&mut axes);
        assert!(svg.contains(">a</text>"));
        assert!(svg.contains(">b</text>"));
        assert!(svg.contains(">c</text>"));
    }
}

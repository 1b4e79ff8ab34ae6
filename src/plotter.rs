//! The plotting façade.
//!
//! A [`Plotter`] owns the instance defaults and one renderer set per
//! dimensionality; every call decodes its series, resolves the layered
//! configuration, acquires a canvas, draws, and runs the output policy.
//! The returned [`Canvas`] can be handed to an `_on` variant to overlay
//! further charts onto the same figure; overlay calls never create a new
//! figure, never resize, and never finalize the borrowed canvas.

use std::path::Path;

use log::debug;

use crate::canvas::{Canvas, CanvasManager};
use crate::chart::planar::PlanarCharts;
use crate::chart::spatial::SpatialCharts;
use crate::chart::ChartKind;
use crate::config::{PlotOptions, PlotterConfig, PlotterDefaults};
use crate::data::IntoPlotData;
use crate::error::{PlotError, PlotResult};
use crate::series::{decode_flat, FlatArg, Series};
use crate::style::{Color, Theme};
use crate::table::Table;

/// The plotting façade.
pub struct Plotter {
    defaults: PlotterDefaults,
    canvases: CanvasManager,
    planar: PlanarCharts,
    spatial: SpatialCharts,
}

impl Plotter {
    /// Create a plotter with the built-in defaults.
    pub fn new() -> Self {
        Self::with_defaults(PlotterDefaults::default())
    }

    /// Create a plotter with explicit defaults.
    pub fn with_defaults(defaults: PlotterDefaults) -> Self {
        let theme = if defaults.use_theme {
            defaults.theme.config()
        } else {
            Theme::Default.config()
        };
        Plotter {
            defaults,
            canvases: CanvasManager::new(theme),
            planar: PlanarCharts::default(),
            spatial: SpatialCharts,
        }
    }

    /// Create a plotter from a JSON configuration file.
    pub fn from_config(path: impl AsRef<Path>) -> PlotResult<Self> {
        let config = PlotterConfig::load(path)?;
        Ok(Self::with_defaults(config.into_defaults()?))
    }

    /// Start building a plotter.
    pub fn builder() -> PlotterBuilder {
        PlotterBuilder::default()
    }

    /// The instance defaults.
    pub fn defaults(&self) -> &PlotterDefaults {
        &self.defaults
    }

    // ---- 2D charts ------------------------------------------------------

    /// Draw a line chart on a fresh canvas.
    pub fn plot_line(&self, series: &[Series], opts: &PlotOptions) -> PlotResult<Canvas> {
        self.render_planar(None, ChartKind::Line, series, opts)
    }

    /// Draw a line chart onto an existing canvas (overlay).
    pub fn plot_line_on(
        &self,
        canvas: Canvas,
        series: &[Series],
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        self.render_planar(Some(canvas), ChartKind::Line, series, opts)
    }

    /// Draw a grouped bar chart on a fresh canvas.
    pub fn plot_bar(&self, series: &[Series], opts: &PlotOptions) -> PlotResult<Canvas> {
        self.render_planar(None, ChartKind::Bar, series, opts)
    }

    /// Draw a grouped bar chart onto an existing canvas (overlay).
    pub fn plot_bar_on(
        &self,
        canvas: Canvas,
        series: &[Series],
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        self.render_planar(Some(canvas), ChartKind::Bar, series, opts)
    }

    /// Draw a scatter chart on a fresh canvas.
    pub fn plot_scatter(&self, series: &[Series], opts: &PlotOptions) -> PlotResult<Canvas> {
        self.render_planar(None, ChartKind::Scatter, series, opts)
    }

    /// Draw a scatter chart onto an existing canvas (overlay).
    pub fn plot_scatter_on(
        &self,
        canvas: Canvas,
        series: &[Series],
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        self.render_planar(Some(canvas), ChartKind::Scatter, series, opts)
    }

    /// Draw a histogram of one data collection.
    pub fn plot_histogram(
        &self,
        data: impl IntoPlotData,
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        self.render_stat(ChartKind::Histogram, &data.into_plot_data(), opts)
    }

    /// Draw a box plot of one data collection.
    pub fn plot_box(&self, data: impl IntoPlotData, opts: &PlotOptions) -> PlotResult<Canvas> {
        self.render_stat(ChartKind::Box, &data.into_plot_data(), opts)
    }

    /// Draw a kernel density estimate of one data collection.
    pub fn plot_density(
        &self,
        data: impl IntoPlotData,
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        self.render_stat(ChartKind::Density, &data.into_plot_data(), opts)
    }

    // ---- 3D charts ------------------------------------------------------

    /// Draw a 3D line chart on a fresh canvas.
    pub fn plot_3d_line(&self, series: &[Series], opts: &PlotOptions) -> PlotResult<Canvas> {
        self.render_spatial(None, ChartKind::Line3, series, opts)
    }

    /// Draw a 3D scatter chart on a fresh canvas.
    pub fn plot_3d_scatter(&self, series: &[Series], opts: &PlotOptions) -> PlotResult<Canvas> {
        self.render_spatial(None, ChartKind::Scatter3, series, opts)
    }

    /// Draw a volumetric bar chart on a fresh canvas.
    pub fn plot_3d_bar(&self, series: &[Series], opts: &PlotOptions) -> PlotResult<Canvas> {
        self.render_spatial(None, ChartKind::Bar3, series, opts)
    }

    /// Draw a 3D chart onto an existing 3D canvas (overlay).
    pub fn plot_3d_on(
        &self,
        canvas: Canvas,
        kind: ChartKind,
        series: &[Series],
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        match kind {
            ChartKind::Line3 | ChartKind::Scatter3 | ChartKind::Bar3 => {
                self.render_spatial(Some(canvas), kind, series, opts)
            }
            other => Err(PlotError::UnsupportedChart(other.to_string())),
        }
    }

    // ---- Generic dispatch -----------------------------------------------

    /// Decode a flat variadic argument list and draw it as `kind`.
    ///
    /// The stride follows the chart kind: 2D kinds group (x, y, label), 3D
    /// line/scatter group (x, y, z, label), volumetric bars group
    /// (x, y, z, dx, dy, label). Single-collection kinds (histogram, box,
    /// density) have no flat grouping and are rejected.
    pub fn plot_flat(
        &self,
        kind: ChartKind,
        args: Vec<FlatArg>,
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        let series = decode_flat(args, kind.stride())?;
        match kind {
            ChartKind::Line | ChartKind::Bar | ChartKind::Scatter => {
                self.render_planar(None, kind, &series, opts)
            }
            ChartKind::Line3 | ChartKind::Scatter3 | ChartKind::Bar3 => {
                self.render_spatial(None, kind, &series, opts)
            }
            other => Err(PlotError::UnsupportedChart(other.to_string())),
        }
    }

    /// Plot one table column against another as `kind` (line, bar, or
    /// scatter). The label defaults to the y column name.
    pub fn plot_table(
        &self,
        table: &Table,
        x_col: &str,
        y_col: &str,
        kind: ChartKind,
        label: Option<&str>,
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        let x = table
            .column(x_col)
            .ok_or_else(|| PlotError::InvalidData(format!("no column '{}'", x_col)))?;
        let y = table
            .column(y_col)
            .ok_or_else(|| PlotError::InvalidData(format!("no column '{}'", y_col)))?;
        let series = vec![Series::xy(x, y, label.unwrap_or(y_col))];

        match kind {
            ChartKind::Line | ChartKind::Bar | ChartKind::Scatter => {
                self.render_planar(None, kind, &series, opts)
            }
            other => Err(PlotError::UnsupportedChart(other.to_string())),
        }
    }

    // ---- Internals ------------------------------------------------------

    fn render_planar(
        &self,
        existing: Option<Canvas>,
        kind: ChartKind,
        series: &[Series],
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        let (style, policy) = opts.resolve(&self.defaults);
        let fresh = existing.is_none();
        debug!("rendering {} chart with {} series", kind, series.len());

        let mut canvas = self.canvases.acquire(existing, &style);
        let axes = canvas.axes_mut().ok_or_else(|| {
            PlotError::InvalidConfig("cannot draw a 2D chart on a 3D canvas".to_string())
        })?;

        match kind {
            ChartKind::Line => self.planar.line(axes, series, &style)?,
            ChartKind::Bar => self.planar.bar(axes, series, &style)?,
            ChartKind::Scatter => self.planar.scatter(axes, series, &style)?,
            other => return Err(PlotError::UnsupportedChart(other.to_string())),
        }

        if fresh {
            CanvasManager::finalize(&mut canvas, &policy)?;
        }
        Ok(canvas)
    }

    fn render_stat(
        &self,
        kind: ChartKind,
        data: &[f64],
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        let (style, policy) = opts.resolve(&self.defaults);
        debug!("rendering {} chart over {} values", kind, data.len());

        let mut canvas = self.canvases.acquire(None, &style);
        let axes = canvas.axes_mut().expect("fresh 2D canvas");

        match kind {
            ChartKind::Histogram => self.planar.histogram(axes, data, &style)?,
            ChartKind::Box => self.planar.boxplot(axes, data, &style)?,
            ChartKind::Density => self.planar.density(axes, data, &style)?,
            other => return Err(PlotError::UnsupportedChart(other.to_string())),
        }

        CanvasManager::finalize(&mut canvas, &policy)?;
        Ok(canvas)
    }

    fn render_spatial(
        &self,
        existing: Option<Canvas>,
        kind: ChartKind,
        series: &[Series],
        opts: &PlotOptions,
    ) -> PlotResult<Canvas> {
        let (style, policy) = opts.resolve(&self.defaults);
        let fresh = existing.is_none();
        debug!("rendering {} chart with {} series", kind, series.len());

        let mut canvas = self.canvases.acquire3(existing, &style);
        let axes = canvas.axes3_mut().ok_or_else(|| {
            PlotError::InvalidConfig("cannot draw a 3D chart on a 2D canvas".to_string())
        })?;

        match kind {
            ChartKind::Line3 => self.spatial.line3(axes, series, &style)?,
            ChartKind::Scatter3 => self.spatial.scatter3(axes, series, &style)?,
            ChartKind::Bar3 => self.spatial.bar3(axes, series, &style)?,
            other => return Err(PlotError::UnsupportedChart(other.to_string())),
        }

        if fresh {
            CanvasManager::finalize(&mut canvas, &policy)?;
        }
        Ok(canvas)
    }
}

impl Default for Plotter {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for the construction-time configuration.
#[derive(Debug, Clone, Default)]
pub struct PlotterBuilder {
    defaults: PlotterDefaults,
    bar_group_width: Option<f64>,
}

impl PlotterBuilder {
    /// Set the default x-axis label.
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.defaults.x_label = label.into();
        self
    }

    /// Set the default y-axis label.
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.defaults.y_label = label.into();
        self
    }

    /// Set the default z-axis label.
    pub fn z_label(mut self, label: impl Into<String>) -> Self {
        self.defaults.z_label = label.into();
        self
    }

    /// Set the default figure size in pixels.
    pub fn figure_size(mut self, width: f64, height: f64) -> Self {
        self.defaults.figure_size = (width, height);
        self
    }

    /// Enable or disable the named theme.
    pub fn use_theme(mut self, enabled: bool) -> Self {
        self.defaults.use_theme = enabled;
        self
    }

    /// Select the named theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.defaults.theme = theme;
        self
    }

    /// Set the default series palette.
    pub fn palette(mut self, palette: Vec<Color>) -> Self {
        self.defaults.palette = palette;
        self
    }

    /// Set the default x-axis label font size.
    pub fn x_label_font_size(mut self, size: f64) -> Self {
        self.defaults.x_label_size = size;
        self
    }

    /// Set the default y-axis label font size.
    pub fn y_label_font_size(mut self, size: f64) -> Self {
        self.defaults.y_label_size = size;
        self
    }

    /// Set the default persist flag.
    pub fn default_persist(mut self, persist: bool) -> Self {
        self.defaults.persist = persist;
        self
    }

    /// Set the default display flag.
    pub fn default_display(mut self, display: bool) -> Self {
        self.defaults.display = display;
        self
    }

    /// Set the default scatter marker size.
    pub fn marker_size(mut self, size: f64) -> Self {
        self.defaults.marker_size = size;
        self
    }

    /// Set the default histogram bin count.
    pub fn bin_count(mut self, bins: usize) -> Self {
        self.defaults.bin_count = bins;
        self
    }

    /// Set the total width of a bar group in category units.
    pub fn bar_group_width(mut self, width: f64) -> Self {
        self.bar_group_width = Some(width);
        self
    }

    /// Build the plotter.
    pub fn build(self) -> Plotter {
        let mut plotter = Plotter::with_defaults(self.defaults);
        if let Some(width) = self.bar_group_width {
            plotter.planar.bar_group_width = width;
        }
        plotter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn quiet() -> PlotOptions {
        PlotOptions::new().persist(false).display(false)
    }

    fn sample_series() -> Vec<Series> {
        vec![
            Series::xy(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![2.0, 3.0, 5.0, 7.0, 11.0], "Line 1"),
            Series::xy(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![1.0, 4.0, 6.0, 8.0, 10.0], "Line 2"),
        ]
    }

    fn unique_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quickplot-plotter-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn line_chart_renders_both_series() {
        let plotter = Plotter::new();
        let mut canvas = plotter.plot_line(&sample_series(), &quiet()).unwrap();
        let svg = canvas.render();
        assert!(svg.contains("Line 1"));
        assert!(svg.contains("Line 2"));
    }

    #[test]
    fn overlay_draws_onto_the_same_figure() {
        let plotter = Plotter::new();
        let canvas = plotter
            .plot_line(
                &[Series::xy(vec![1.0, 2.0], vec![1.0, 2.0], "base")],
                &quiet(),
            )
            .unwrap();

        let mut canvas = plotter
            .plot_scatter_on(
                canvas,
                &[Series::xy(vec![1.0, 2.0], vec![2.0, 1.0], "points")],
                &quiet().figure_size(10.0, 10.0),
            )
            .unwrap();

        // One figure: the original size survives the overlay call
        assert_eq!(canvas.width(), 960.0);
        let svg = canvas.render();
        assert!(svg.contains("base"));
        assert!(svg.contains("points"));
    }

    #[test]
    fn persistence_round_trip_creates_nested_directories() {
        let dir = unique_dir("roundtrip");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("deep/nested/plot.svg");

        let plotter = Plotter::new();
        plotter
            .plot_line(
                &sample_series(),
                &PlotOptions::new()
                    .persist(true)
                    .display(false)
                    .output_path(&path),
            )
            .unwrap();

        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn palette_cycles_across_series() {
        let plotter = Plotter::new();
        let palette = vec![Color::from_hex("#FF5733").unwrap(), Color::from_hex("#33FF57").unwrap()];
        let series = vec![
            Series::xy(vec![1.0, 2.0], vec![1.0, 2.0], "a"),
            Series::xy(vec![1.0, 2.0], vec![2.0, 3.0], "b"),
            Series::xy(vec![1.0, 2.0], vec![3.0, 4.0], "c"),
        ];
        let mut canvas = plotter
            .plot_line(&series, &quiet().palette(palette))
            .unwrap();
        let svg = canvas.render();
        // Series 0 and 2 share a color (index mod palette length)
        assert!(svg.matches("rgb(255,87,51)").count() >= 2);
        assert!(svg.contains("rgb(51,255,87)"));
    }

    #[test]
    fn empty_palette_surfaces_the_error() {
        let plotter = Plotter::new();
        let err = plotter
            .plot_line(&sample_series(), &quiet().palette(vec![]))
            .unwrap_err();
        assert!(matches!(err, PlotError::EmptyPalette));
    }

    #[test]
    fn flat_dispatch_decodes_by_kind() {
        let plotter = Plotter::new();
        let args = vec![
            FlatArg::from(vec![1.0, 2.0, 3.0]),
            FlatArg::from(vec![4.0, 5.0, 6.0]),
            FlatArg::from("flat"),
        ];
        let mut canvas = plotter
            .plot_flat(ChartKind::Line, args, &quiet())
            .unwrap();
        assert!(canvas.render().contains("flat"));

        // Incomplete group
        let err = plotter
            .plot_flat(
                ChartKind::Line,
                vec![FlatArg::from(vec![1.0]), FlatArg::from(vec![2.0])],
                &quiet(),
            )
            .unwrap_err();
        assert!(matches!(err, PlotError::MalformedSeries { .. }));
    }

    #[test]
    fn flat_dispatch_rejects_single_collection_kinds() {
        let plotter = Plotter::new();
        assert!(matches!(
            plotter.plot_flat(ChartKind::Histogram, vec![], &quiet()),
            Err(PlotError::UnsupportedChart(_))
        ));
    }

    #[test]
    fn table_plot_defaults_label_to_column_name() {
        let mut table = Table::new();
        table.insert("X", vec![1.0, 2.0, 3.0]);
        table.insert("Y", vec![2.0, 4.0, 6.0]);

        let plotter = Plotter::new();
        let mut canvas = plotter
            .plot_table(&table, "X", "Y", ChartKind::Line, None, &quiet())
            .unwrap();
        assert!(canvas.render().contains(">Y</text>"));

        let err = plotter
            .plot_table(&table, "X", "Y", ChartKind::Histogram, None, &quiet())
            .unwrap_err();
        assert!(matches!(err, PlotError::UnsupportedChart(_)));

        let err = plotter
            .plot_table(&table, "missing", "Y", ChartKind::Line, None, &quiet())
            .unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
    }

    #[test]
    fn spatial_charts_render() {
        let plotter = Plotter::new();
        let series = vec![Series::xyz(
            vec![1.0, 2.0, 3.0],
            vec![1.0, 4.0, 9.0],
            vec![1.0, 8.0, 27.0],
            "3D Line 1",
        )];
        let mut canvas = plotter.plot_3d_line(&series, &quiet()).unwrap();
        let svg = canvas.render();
        assert!(svg.contains("3D Line 1"));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn volumetric_bars_render_and_validate() {
        let plotter = Plotter::new();
        let good = vec![Series::volumetric(
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![1.0, 4.0],
            0.1,
            0.1,
            "3D Bar 1",
        )];
        let mut canvas = plotter.plot_3d_bar(&good, &quiet()).unwrap();
        assert!(canvas.render().contains("3D Bar 1"));

        let bad = vec![Series::volumetric(
            vec![1.0],
            vec![1.0],
            vec![-2.0],
            0.1,
            0.1,
            "bad",
        )];
        assert!(matches!(
            plotter.plot_3d_bar(&bad, &quiet()),
            Err(PlotError::NegativeExtent { .. })
        ));
    }

    #[test]
    fn builder_sets_construction_options() {
        let plotter = Plotter::builder()
            .x_label("X")
            .y_label("Y")
            .z_label("Z")
            .figure_size(640.0, 360.0)
            .theme(Theme::Dark)
            .default_persist(false)
            .default_display(false)
            .bar_group_width(0.5)
            .build();
        assert_eq!(plotter.defaults().x_label, "X");
        assert_eq!(plotter.defaults().figure_size, (640.0, 360.0));
        assert_eq!(plotter.defaults().theme, Theme::Dark);
        assert!(!plotter.defaults().persist);
        assert_eq!(plotter.planar.bar_group_width, 0.5);
    }

    #[test]
    fn per_call_labels_override_instance_defaults() {
        let plotter = Plotter::builder().x_label("default-x").build();
        let mut canvas = plotter
            .plot_line(&sample_series(), &quiet().x_label("call-x"))
            .unwrap();
        let svg = canvas.render();
        assert!(svg.contains("call-x"));
        assert!(!svg.contains("default-x"));
    }
}

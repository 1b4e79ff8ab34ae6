//! Plotter configuration: instance defaults, per-call overrides, and their
//! resolution into the per-render style and output policy.
//!
//! Every per-call field is an `Option` so "caller passed nothing" is
//! distinct from any explicit value: an explicitly empty palette stays
//! empty (and surfaces [`crate::error::PlotError::EmptyPalette`] at color
//! time) rather than silently falling back to the default.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PlotError, PlotResult};
use crate::style::{default_palette, Color, Theme};

/// Instance-wide defaults, fixed at construction.
#[derive(Debug, Clone)]
pub struct PlotterDefaults {
    /// Default x-axis label
    pub x_label: String,
    /// Default y-axis label
    pub y_label: String,
    /// Default z-axis label (3D charts)
    pub z_label: String,
    /// Default figure size in pixels (width, height)
    pub figure_size: (f64, f64),
    /// Default series palette
    pub palette: Vec<Color>,
    /// Default x-axis label font size
    pub x_label_size: f64,
    /// Default y-axis label font size
    pub y_label_size: f64,
    /// Whether the named theme is applied to new canvases
    pub use_theme: bool,
    /// Named theme applied when `use_theme` is set
    pub theme: Theme,
    /// Default persist flag (save when an output path is given)
    pub persist: bool,
    /// Default display flag (open the rendered chart)
    pub display: bool,
    /// Default equal-aspect flag
    pub equal_aspect: bool,
    /// Default marker size for scatter charts
    pub marker_size: f64,
    /// Default histogram bin count
    pub bin_count: usize,
}

impl Default for PlotterDefaults {
    fn default() -> Self {
        PlotterDefaults {
            x_label: "X-axis".to_string(),
            y_label: "Y-axis".to_string(),
            z_label: "Z-axis".to_string(),
            figure_size: (960.0, 540.0),
            palette: default_palette(),
            x_label_size: 12.0,
            y_label_size: 12.0,
            use_theme: true,
            theme: Theme::Seaborn,
            persist: true,
            // No interactive side effect unless asked for; auto-show is a
            // CLI behavior, not a library one.
            display: false,
            equal_aspect: false,
            marker_size: 6.0,
            bin_count: 10,
        }
    }
}

/// The style resolved for one render call. Never mutated mid-render.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub figure_size: (f64, f64),
    pub palette: Vec<Color>,
    pub x_label: String,
    pub y_label: String,
    pub z_label: String,
    pub x_label_size: f64,
    pub y_label_size: f64,
    pub equal_aspect: bool,
    pub marker_size: f64,
    pub bin_count: usize,
}

/// The output side effects resolved for one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPolicy {
    /// Whether to persist the canvas (requires `output_path`)
    pub persist: bool,
    /// Target path for persistence
    pub output_path: Option<PathBuf>,
    /// Whether to open the rendered chart interactively
    pub display: bool,
}

/// Per-call overrides. Unset fields fall back to the plotter defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotOptions {
    x_label: Option<String>,
    y_label: Option<String>,
    output_path: Option<PathBuf>,
    figure_size: Option<(f64, f64)>,
    equal_aspect: Option<bool>,
    palette: Option<Vec<Color>>,
    persist: Option<bool>,
    display: Option<bool>,
    marker_size: Option<f64>,
    bin_count: Option<usize>,
    x_label_size: Option<f64>,
    y_label_size: Option<f64>,
}

impl PlotOptions {
    /// Create an empty override set (everything falls back to defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the x-axis label for this call.
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Override the y-axis label for this call.
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Set the save path for this call.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Override the figure size for this call.
    pub fn figure_size(mut self, width: f64, height: f64) -> Self {
        self.figure_size = Some((width, height));
        self
    }

    /// Constrain the axes to equal aspect.
    pub fn equal_aspect(mut self, equal: bool) -> Self {
        self.equal_aspect = Some(equal);
        self
    }

    /// Override the series palette for this call. An explicitly empty
    /// palette is kept empty.
    pub fn palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Override the persist flag for this call.
    pub fn persist(mut self, persist: bool) -> Self {
        self.persist = Some(persist);
        self
    }

    /// Override the display flag for this call.
    pub fn display(mut self, display: bool) -> Self {
        self.display = Some(display);
        self
    }

    /// Override the scatter marker size for this call.
    pub fn marker_size(mut self, size: f64) -> Self {
        self.marker_size = Some(size);
        self
    }

    /// Override the histogram bin count for this call.
    pub fn bin_count(mut self, bins: usize) -> Self {
        self.bin_count = Some(bins);
        self
    }

    /// Override the x-axis label font size for this call.
    pub fn x_label_size(mut self, size: f64) -> Self {
        self.x_label_size = Some(size);
        self
    }

    /// Override the y-axis label font size for this call.
    pub fn y_label_size(mut self, size: f64) -> Self {
        self.y_label_size = Some(size);
        self
    }

    /// Resolve these overrides against the plotter defaults.
    ///
    /// Pure and total: each field independently takes the override when
    /// explicitly provided, else the default. Resolving twice yields
    /// identical results.
    pub fn resolve(&self, defaults: &PlotterDefaults) -> (StyleConfig, OutputPolicy) {
        let style = StyleConfig {
            figure_size: self.figure_size.unwrap_or(defaults.figure_size),
            palette: self
                .palette
                .clone()
                .unwrap_or_else(|| defaults.palette.clone()),
            x_label: self
                .x_label
                .clone()
                .unwrap_or_else(|| defaults.x_label.clone()),
            y_label: self
                .y_label
                .clone()
                .unwrap_or_else(|| defaults.y_label.clone()),
            z_label: defaults.z_label.clone(),
            x_label_size: self.x_label_size.unwrap_or(defaults.x_label_size),
            y_label_size: self.y_label_size.unwrap_or(defaults.y_label_size),
            equal_aspect: self.equal_aspect.unwrap_or(defaults.equal_aspect),
            marker_size: self.marker_size.unwrap_or(defaults.marker_size),
            bin_count: self.bin_count.unwrap_or(defaults.bin_count),
        };
        let output = OutputPolicy {
            persist: self.persist.unwrap_or(defaults.persist),
            output_path: self.output_path.clone(),
            display: self.display.unwrap_or(defaults.display),
        };
        (style, output)
    }
}

/// File-loadable plotter configuration (JSON), mapping onto
/// [`PlotterDefaults`]. Absent fields keep the built-in defaults.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PlotterConfig {
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub z_label: Option<String>,
    pub figure_size: Option<(f64, f64)>,
    /// Palette as hex strings, e.g. ["#8891DB", "#C7988C"]
    pub palette: Option<Vec<String>>,
    pub x_label_font_size: Option<f64>,
    pub y_label_font_size: Option<f64>,
    pub use_theme: Option<bool>,
    pub theme_name: Option<String>,
    pub default_persist: Option<bool>,
    pub default_display: Option<bool>,
    pub marker_size: Option<f64>,
    pub bin_count: Option<usize>,
}

impl PlotterConfig {
    /// Load plotter configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: PlotterConfig = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Convert into plotter defaults, validating theme name and palette.
    pub fn into_defaults(self) -> PlotResult<PlotterDefaults> {
        let base = PlotterDefaults::default();
        let palette = match self.palette {
            Some(entries) => {
                let mut colors = Vec::with_capacity(entries.len());
                for entry in entries {
                    let color = Color::from_hex(&entry).ok_or_else(|| {
                        PlotError::InvalidConfig(format!("bad palette color '{}'", entry))
                    })?;
                    colors.push(color);
                }
                colors
            }
            None => base.palette,
        };
        let theme = match self.theme_name {
            Some(name) => name.parse::<Theme>()?,
            None => base.theme,
        };

        Ok(PlotterDefaults {
            x_label: self.x_label.unwrap_or(base.x_label),
            y_label: self.y_label.unwrap_or(base.y_label),
            z_label: self.z_label.unwrap_or(base.z_label),
            figure_size: self.figure_size.unwrap_or(base.figure_size),
            palette,
            x_label_size: self.x_label_font_size.unwrap_or(base.x_label_size),
            y_label_size: self.y_label_font_size.unwrap_or(base.y_label_size),
            use_theme: self.use_theme.unwrap_or(base.use_theme),
            theme,
            persist: self.default_persist.unwrap_or(base.persist),
            display: self.default_display.unwrap_or(base.display),
            equal_aspect: base.equal_aspect,
            marker_size: self.marker_size.unwrap_or(base.marker_size),
            bin_count: self.bin_count.unwrap_or(base.bin_count),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_idempotent() {
        let defaults = PlotterDefaults::default();
        let opts = PlotOptions::new()
            .figure_size(640.0, 480.0)
            .x_label("time")
            .persist(false);
        assert_eq!(opts.resolve(&defaults), opts.resolve(&defaults));
    }

    #[test]
    fn unset_fields_fall_back_to_defaults() {
        let defaults = PlotterDefaults::default();
        let (style, output) = PlotOptions::new().resolve(&defaults);
        assert_eq!(style.figure_size, defaults.figure_size);
        assert_eq!(style.palette, defaults.palette);
        assert_eq!(style.x_label, defaults.x_label);
        assert_eq!(output.persist, defaults.persist);
        assert_eq!(output.display, defaults.display);
        assert_eq!(output.output_path, None);
    }

    #[test]
    fn overrides_are_independent_per_field() {
        let defaults = PlotterDefaults::default();
        let (base_style, _) = PlotOptions::new().resolve(&defaults);
        let (style, _) = PlotOptions::new()
            .figure_size(100.0, 100.0)
            .resolve(&defaults);
        assert_eq!(style.figure_size, (100.0, 100.0));
        // Everything else is untouched
        assert_eq!(style.palette, base_style.palette);
        assert_eq!(style.x_label, base_style.x_label);
        assert_eq!(style.y_label, base_style.y_label);
        assert_eq!(style.equal_aspect, base_style.equal_aspect);
        assert_eq!(style.marker_size, base_style.marker_size);
        assert_eq!(style.bin_count, base_style.bin_count);
    }

    #[test]
    fn explicit_empty_palette_does_not_fall_back() {
        let defaults = PlotterDefaults::default();
        let (style, _) = PlotOptions::new().palette(vec![]).resolve(&defaults);
        assert!(style.palette.is_empty());
    }

    #[test]
    fn label_font_sizes_override_per_call() {
        let defaults = PlotterDefaults::default();
        let (style, _) = PlotOptions::new().x_label_size(18.0).resolve(&defaults);
        assert_eq!(style.x_label_size, 18.0);
        assert_eq!(style.y_label_size, defaults.y_label_size);
    }

    #[test]
    fn explicit_false_flags_win_over_true_defaults() {
        let defaults = PlotterDefaults {
            persist: true,
            display: true,
            ..Default::default()
        };
        let (_, output) = PlotOptions::new()
            .persist(false)
            .display(false)
            .resolve(&defaults);
        assert!(!output.persist);
        assert!(!output.display);
    }

    #[test]
    fn config_file_fields_map_onto_defaults() {
        let config: PlotterConfig = serde_json::from_str(
            r##"{
                "x_label": "Time (s)",
                "figure_size": [640.0, 360.0],
                "palette": ["#FF5733", "#33FF57"],
                "theme_name": "darkgrid",
                "default_display": false
            }"##,
        )
        .unwrap();
        let defaults = config.into_defaults().unwrap();
        assert_eq!(defaults.x_label, "Time (s)");
        assert_eq!(defaults.figure_size, (640.0, 360.0));
        assert_eq!(defaults.palette.len(), 2);
        assert_eq!(defaults.theme, Theme::Dark);
        assert!(!defaults.display);
        // Untouched fields keep built-ins
        assert_eq!(defaults.y_label, "Y-axis");
    }

    #[test]
    fn bad_palette_entry_is_rejected() {
        let config = PlotterConfig {
            palette: Some(vec!["#XYZ".to_string()]),
            ..Default::default()
        };
        assert!(config.into_defaults().is_err());
    }
}

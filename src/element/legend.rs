//! Legend configuration.

use crate::style::{Color, FillStyle, LineStyle, MarkerStyle, TextStyle};

/// Position of the legend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LegendPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    #[default]
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

impl LegendPosition {
    /// Whether the legend hugs the left edge of the plot area.
    pub fn is_left(&self) -> bool {
        matches!(self, LegendPosition::TopLeft | LegendPosition::BottomLeft)
    }

    /// Whether the legend hugs the top edge of the plot area.
    pub fn is_top(&self) -> bool {
        matches!(self, LegendPosition::TopLeft | LegendPosition::TopRight)
    }
}

/// A single entry in the legend.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    /// Label text
    pub label: String,
    /// Line style (if applicable)
    pub line_style: Option<LineStyle>,
    /// Marker style (if applicable)
    pub marker_style: Option<MarkerStyle>,
    /// Fill style (for bar charts, etc.)
    pub fill_style: Option<FillStyle>,
}

impl LegendEntry {
    /// Create a new legend entry with just a label.
    pub fn new(label: impl Into<String>) -> Self {
        LegendEntry {
            label: label.into(),
            line_style: None,
            marker_style: None,
            fill_style: None,
        }
    }

    /// Set the line style.
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    /// Set the marker style.
    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = Some(style);
        self
    }

    /// Set the fill style.
    pub fn fill_style(mut self, style: FillStyle) -> Self {
        self.fill_style = Some(style);
        self
    }
}

/// Legend configuration.
#[derive(Debug, Clone)]
pub struct Legend {
    /// Legend entries
    pub entries: Vec<LegendEntry>,
    /// Position of the legend
    pub position: LegendPosition,
    /// Whether the legend is visible
    pub visible: bool,
    /// Background fill style
    pub background: FillStyle,
    /// Text style for labels
    pub text_style: TextStyle,
    /// Padding inside the legend box
    pub padding: f64,
    /// Length of the line sample in the legend
    pub line_length: f64,
    /// Gap between line/marker and label
    pub label_gap: f64,
}

impl Legend {
    /// Create a new legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the legend.
    pub fn add_entry(&mut self, entry: LegendEntry) {
        self.entries.push(entry);
    }
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            entries: Vec::new(),
            position: LegendPosition::default(),
            visible: true,
            background: FillStyle::new(Color::WHITE)
                .opacity(0.85)
                .stroke(Color::LIGHT_GRAY)
                .stroke_width(0.5),
            text_style: TextStyle::new().font_size(10.0),
            padding: 6.0,
            line_length: 20.0,
            label_gap: 6.0,
        }
    }
}

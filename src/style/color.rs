//! Color definitions and palette cycling.

use std::fmt;

use crate::error::{PlotError, PlotResult};

/// Represents a color for plotting elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named color (e.g., "red", "blue")
    Named(String),
}

impl Color {
    /// Create a new RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a new RGBA color.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba(r, g, b, a.clamp(0.0, 1.0))
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if hex.len() == 8 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some(Color::Rgba(r, g, b, a as f64 / 255.0))
        } else {
            None
        }
    }

    /// Convert the color to an SVG-compatible string.
    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => resolve_named_color(name),
        }
    }

    /// Get the alpha value (opacity) of the color.
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgba(_, _, _, a) => *a,
            _ => 1.0,
        }
    }

    /// Scale the color's brightness by `factor` (0.0 - 1.0). Used to shade
    /// the side faces of volumetric bars. Named colors are returned as-is.
    pub fn shaded(&self, factor: f64) -> Color {
        let f = factor.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f64 * f).round() as u8;
        match self {
            Color::Rgb(r, g, b) => Color::Rgb(scale(*r), scale(*g), scale(*b)),
            Color::Rgba(r, g, b, a) => Color::Rgba(scale(*r), scale(*g), scale(*b), *a),
            Color::Named(_) => self.clone(),
        }
    }

    // Predefined colors
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GREEN: Color = Color::Rgb(0, 128, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_string())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if s.starts_with('#') || s.chars().all(|c| c.is_ascii_hexdigit()) && s.len() >= 6 {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, f64)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, f64)) -> Self {
        Color::Rgba(r, g, b, a)
    }
}

/// Resolve a named color to its hex value.
fn resolve_named_color(name: &str) -> String {
    match name.to_lowercase().as_str() {
        "black" => "#000000".to_string(),
        "white" => "#FFFFFF".to_string(),
        "red" => "#FF0000".to_string(),
        "green" => "#008000".to_string(),
        "blue" => "#0000FF".to_string(),
        "yellow" => "#FFFF00".to_string(),
        "cyan" | "aqua" => "#00FFFF".to_string(),
        "magenta" | "fuchsia" => "#FF00FF".to_string(),
        "orange" => "#FFA500".to_string(),
        "purple" => "#800080".to_string(),
        "gray" | "grey" => "#808080".to_string(),
        "lightgray" | "lightgrey" => "#D3D3D3".to_string(),
        "darkgray" | "darkgrey" => "#404040".to_string(),
        "pink" => "#FFC0CB".to_string(),
        "brown" => "#A52A2A".to_string(),
        "navy" => "#000080".to_string(),
        "teal" => "#008080".to_string(),

        // Single-letter shortcuts (matplotlib style)
        "b" => "#0000FF".to_string(),
        "g" => "#008000".to_string(),
        "r" => "#FF0000".to_string(),
        "c" => "#00FFFF".to_string(),
        "m" => "#FF00FF".to_string(),
        "y" => "#FFFF00".to_string(),
        "k" => "#000000".to_string(),
        "w" => "#FFFFFF".to_string(),

        // Default: return as-is (might be a valid CSS color)
        _ => name.to_string(),
    }
}

/// The built-in series palette used when neither the call nor the plotter
/// supplies one.
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::from_hex("#8891DB").unwrap(),
        Color::from_hex("#C7988C").unwrap(),
        Color::from_hex("#A5C496").unwrap(),
    ]
}

/// Pick the color for the series at `index` in decode order, wrapping
/// modulo the palette length.
///
/// Pure: the same index and palette always yield the same color.
pub fn palette_color(index: usize, palette: &[Color]) -> PlotResult<Color> {
    if palette.is_empty() {
        return Err(PlotError::EmptyPalette);
    }
    Ok(palette[index % palette.len()].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_round_trips() {
        assert_eq!(Color::from_hex("#FF5733"), Some(Color::Rgb(255, 87, 51)));
        assert_eq!(Color::from_hex("8891DB"), Some(Color::Rgb(136, 145, 219)));
        assert!(Color::from_hex("#12").is_none());
    }

    #[test]
    fn cycling_wraps_modulo_palette_length() {
        let palette = vec![Color::RED, Color::GREEN];
        assert_eq!(
            palette_color(0, &palette).unwrap(),
            palette_color(2, &palette).unwrap()
        );
        assert_eq!(
            palette_color(1, &palette).unwrap(),
            palette_color(5, &palette).unwrap()
        );
        assert_ne!(
            palette_color(0, &palette).unwrap(),
            palette_color(1, &palette).unwrap()
        );
    }

    #[test]
    fn cycling_is_deterministic() {
        let palette = default_palette();
        for i in 0..10 {
            assert_eq!(
                palette_color(i, &palette).unwrap(),
                palette_color(i, &palette).unwrap()
            );
        }
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(
            palette_color(0, &[]),
            Err(PlotError::EmptyPalette)
        ));
    }
}

//! Text styling options.

use super::color::Color;

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Normal weight
    #[default]
    Normal,
    /// Bold weight
    Bold,
}

impl FontWeight {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Text anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Anchor at the start (left for LTR text)
    #[default]
    Start,
    /// Anchor at the middle
    Middle,
    /// Anchor at the end (right for LTR text)
    End,
}

impl TextAnchor {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Style configuration for text elements.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Font family (e.g., "Times New Roman", "sans-serif")
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    /// Font weight
    pub weight: FontWeight,
    /// Text color
    pub color: Color,
    /// Horizontal anchor
    pub anchor: TextAnchor,
    /// Rotation angle in degrees
    pub rotation: f64,
}

impl TextStyle {
    /// Create a new text style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the font size.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set bold weight.
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the text anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the rotation angle in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Generate SVG style attributes (excluding positioning attributes).
    pub fn to_svg_attrs(&self) -> String {
        [
            format!("font-family=\"{}\"", self.font_family),
            format!("font-size=\"{}\"", self.font_size),
            format!("font-weight=\"{}\"", self.weight.to_svg_string()),
            format!("fill=\"{}\"", self.color.to_svg_string()),
        ]
        .join(" ")
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: "Times New Roman, serif".to_string(),
            font_size: 12.0,
            weight: FontWeight::Normal,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
            rotation: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_attrs_carry_family_and_size() {
        let style = TextStyle::new().font_size(14.0);
        let attrs = style.to_svg_attrs();
        assert!(attrs.contains("font-size=\"14\""));
        assert!(attrs.contains("Times New Roman"));
    }
}

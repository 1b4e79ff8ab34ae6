//! Text element for labels and annotations.

use crate::style::{TextAnchor, TextStyle};

/// A text element that can be rendered on a plot.
#[derive(Debug, Clone)]
pub struct Text {
    /// The text content
    pub content: String,
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Style configuration
    pub style: TextStyle,
}

impl Text {
    /// Create a new text element.
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            style: TextStyle::default(),
        }
    }

    /// Set the style for this text.
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Position the text at the given point with the given anchor.
    pub fn at(mut self, x: f64, y: f64, anchor: TextAnchor) -> Self {
        self.x = x;
        self.y = y;
        self.style.anchor = anchor;
        self
    }

    /// Generate SVG for this text element.
    pub fn to_svg(&self) -> String {
        let transform = if self.style.rotation != 0.0 {
            format!(
                " transform=\"rotate({},{},{})\"",
                self.style.rotation, self.x, self.y
            )
        } else {
            String::new()
        };

        format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"{}\" {}{}>{}</text>",
            self.x,
            self.y,
            self.style.anchor.to_svg_string(),
            self.style.to_svg_attrs(),
            transform,
            escape_xml(&self.content)
        )
    }
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_escaping_covers_markup_characters() {
        assert_eq!(escape_xml("a<b&c>"), "a&lt;b&amp;c&gt;");
    }

    #[test]
    fn rotated_text_carries_transform() {
        let mut t = Text::new("Y", 10.0, 20.0);
        t.style.rotation = -90.0;
        assert!(t.to_svg().contains("rotate(-90,10,20)"));
    }
}

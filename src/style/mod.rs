//! Styling module: colors, palettes, line/marker/fill/text styles, themes.

pub mod color;
pub mod fill_style;
pub mod line_style;
pub mod marker;
pub mod text_style;
pub mod theme;

pub use color::{default_palette, palette_color, Color};
pub use fill_style::FillStyle;
pub use line_style::{DashPattern, LineStyle};
pub use marker::{Marker, MarkerStyle};
pub use text_style::{FontWeight, TextAnchor, TextStyle};
pub use theme::{Theme, ThemeConfig};

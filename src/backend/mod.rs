//! Rendering backends.
//!
//! The backend is the drawing-primitive sink: axes and plot elements emit
//! lines, shapes, and text into it, and it produces the final document.

mod svg;

pub use svg::SvgBackend;

//! quickplot: a matplotlib-style plotting façade with SVG output.
//!
//! A [`Plotter`] carries instance-wide defaults (labels, figure size,
//! palette, theme, output policy) and renders line, bar, scatter,
//! histogram, box, density, and 3D charts with consistent styling and
//! color cycling. Per-call [`PlotOptions`] override any default
//! independently; the returned [`Canvas`] can be passed back in to overlay
//! further charts onto the same figure.
//!
//! ```no_run
//! use quickplot::{PlotOptions, Plotter, Series};
//!
//! let plotter = Plotter::builder().x_label("X").y_label("Y").build();
//! plotter.plot_line(
//!     &[Series::xy(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 9.0], "Line 1")],
//!     &PlotOptions::new().output_path("pic/line.svg").display(false),
//! )?;
//! # Ok::<(), quickplot::PlotError>(())
//! ```

pub mod axes;
pub mod axes3;
pub mod backend;
pub mod canvas;
pub mod chart;
pub mod config;
pub mod data;
pub mod element;
pub mod error;
pub mod plot;
pub mod scale;
pub mod series;
pub mod stats;
pub mod style;
pub mod table;

mod plotter;

pub use canvas::Canvas;
pub use chart::ChartKind;
pub use config::{OutputPolicy, PlotOptions, PlotterConfig, PlotterDefaults, StyleConfig};
pub use data::IntoPlotData;
pub use error::{PlotError, PlotResult};
pub use plotter::{Plotter, PlotterBuilder};
pub use series::{decode_flat, FlatArg, Series, Stride};
pub use table::Table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::chart::ChartKind;
    pub use crate::config::{PlotOptions, PlotterDefaults};
    pub use crate::data::IntoPlotData;
    pub use crate::error::{PlotError, PlotResult};
    pub use crate::plotter::Plotter;
    pub use crate::series::{decode_flat, FlatArg, Series, Stride};
    pub use crate::style::{Color, Marker, Theme};
    pub use crate::table::Table;
}

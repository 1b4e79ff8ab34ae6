//! Chart renderers: the 2D and 3D renderer sets and chart-kind dispatch.

pub(crate) mod planar;
pub(crate) mod spatial;

use std::fmt;
use std::str::FromStr;

use crate::error::PlotError;
use crate::series::Stride;

/// The chart kinds the façade can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
    Histogram,
    Box,
    Density,
    Line3,
    Scatter3,
    Bar3,
}

impl ChartKind {
    /// The flat-argument stride used when decoding series for this kind.
    pub fn stride(&self) -> Stride {
        match self {
            ChartKind::Line
            | ChartKind::Bar
            | ChartKind::Scatter
            | ChartKind::Histogram
            | ChartKind::Box
            | ChartKind::Density => Stride::Planar,
            ChartKind::Line3 | ChartKind::Scatter3 => Stride::Spatial,
            ChartKind::Bar3 => Stride::Volumetric,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::Box => "box",
            ChartKind::Density => "density",
            ChartKind::Line3 => "line3",
            ChartKind::Scatter3 => "scatter3",
            ChartKind::Bar3 => "bar3",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ChartKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            "scatter" => Ok(ChartKind::Scatter),
            "histogram" | "hist" => Ok(ChartKind::Histogram),
            "box" | "boxplot" => Ok(ChartKind::Box),
            "density" | "kde" => Ok(ChartKind::Density),
            "line3" | "line3d" | "3d-line" => Ok(ChartKind::Line3),
            "scatter3" | "scatter3d" | "3d-scatter" => Ok(ChartKind::Scatter3),
            "bar3" | "bar3d" | "3d-bar" => Ok(ChartKind::Bar3),
            other => Err(PlotError::UnsupportedChart(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in [
            ChartKind::Line,
            ChartKind::Bar,
            ChartKind::Scatter,
            ChartKind::Histogram,
            ChartKind::Box,
            ChartKind::Density,
            ChartKind::Line3,
            ChartKind::Scatter3,
            ChartKind::Bar3,
        ] {
            assert_eq!(kind.to_string().parse::<ChartKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        assert!(matches!(
            "pie".parse::<ChartKind>(),
            Err(PlotError::UnsupportedChart(_))
        ));
    }

    #[test]
    fn stride_follows_dimensionality() {
        assert_eq!(ChartKind::Line.stride().width(), 3);
        assert_eq!(ChartKind::Scatter3.stride().width(), 4);
        assert_eq!(ChartKind::Bar3.stride().width(), 6);
    }
}

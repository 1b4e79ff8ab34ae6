//! Series records and the flat variadic decoding adapter.
//!
//! The typed [`Series`] record is the primary representation. The flat
//! adapter ([`decode_flat`]) exists for callers that carry chart data as a
//! single loosely-typed argument list: values are grouped by a fixed stride
//! into (x, y[, z[, extents]], label) records. Decoding validates arity
//! only; whether a slot's value is usable is the renderer's concern.

use std::fmt;

use crate::data::IntoPlotData;
use crate::error::{PlotError, PlotResult};

/// One decoded data series.
///
/// Immutable once decoded; record order equals argument order and drives
/// both color assignment and z-order (later series draw on top).
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// X values
    pub x: Vec<f64>,
    /// Y values
    pub y: Vec<f64>,
    /// Z values (3D charts only)
    pub z: Option<Vec<f64>>,
    /// Per-axis footprint (dx, dy) for volumetric bars
    pub extent: Option<(f64, f64)>,
    /// Legend label
    pub label: String,
}

impl Series {
    /// Create a 2D series.
    pub fn xy(x: impl IntoPlotData, y: impl IntoPlotData, label: impl Into<String>) -> Self {
        Series {
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            z: None,
            extent: None,
            label: label.into(),
        }
    }

    /// Create a 3D series.
    pub fn xyz(
        x: impl IntoPlotData,
        y: impl IntoPlotData,
        z: impl IntoPlotData,
        label: impl Into<String>,
    ) -> Self {
        Series {
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            z: Some(z.into_plot_data()),
            extent: None,
            label: label.into(),
        }
    }

    /// Create a volumetric (3D bar) series: z holds bar heights, the extent
    /// pair is the per-bar footprint along x and y.
    pub fn volumetric(
        x: impl IntoPlotData,
        y: impl IntoPlotData,
        z: impl IntoPlotData,
        dx: f64,
        dy: f64,
        label: impl Into<String>,
    ) -> Self {
        Series {
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            z: Some(z.into_plot_data()),
            extent: Some((dx, dy)),
            label: label.into(),
        }
    }
}

/// Group width of a flat argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stride {
    /// (x, y, label) — 2D charts
    Planar,
    /// (x, y, z, label) — 3D line/scatter
    Spatial,
    /// (x, y, z, dx, dy, label) — 3D bars
    Volumetric,
}

impl Stride {
    /// Number of flat values per series group.
    pub fn width(&self) -> usize {
        match self {
            Stride::Planar => 3,
            Stride::Spatial => 4,
            Stride::Volumetric => 6,
        }
    }
}

/// One loosely-typed value in a flat argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum FlatArg {
    /// A data vector
    Data(Vec<f64>),
    /// A single number
    Num(f64),
    /// A text value
    Text(String),
}

impl FlatArg {
    /// Coerce into a data vector. A bare number becomes a singleton; text
    /// parses as a single number when possible and is otherwise empty
    /// (renderers that need aligned data report the mismatch).
    fn into_data(self) -> Vec<f64> {
        match self {
            FlatArg::Data(v) => v,
            FlatArg::Num(n) => vec![n],
            FlatArg::Text(s) => s.trim().parse::<f64>().map(|n| vec![n]).unwrap_or_default(),
        }
    }

    /// Coerce into a label string.
    fn into_label(self) -> String {
        match self {
            FlatArg::Text(s) => s,
            FlatArg::Num(n) => format_num(n),
            FlatArg::Data(v) => {
                let items: Vec<String> = v.iter().map(|n| format_num(*n)).collect();
                format!("[{}]", items.join(", "))
            }
        }
    }

    /// Coerce into a scalar (extent slots).
    fn as_scalar(&self) -> f64 {
        match self {
            FlatArg::Num(n) => *n,
            FlatArg::Data(v) => v.first().copied().unwrap_or(0.0),
            FlatArg::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

fn format_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for FlatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatArg::Text(s) => write!(f, "{}", s),
            FlatArg::Num(n) => write!(f, "{}", format_num(*n)),
            FlatArg::Data(v) => write!(f, "data[{}]", v.len()),
        }
    }
}

impl From<Vec<f64>> for FlatArg {
    fn from(v: Vec<f64>) -> Self {
        FlatArg::Data(v)
    }
}

impl From<&[f64]> for FlatArg {
    fn from(v: &[f64]) -> Self {
        FlatArg::Data(v.to_vec())
    }
}

impl From<Vec<i32>> for FlatArg {
    fn from(v: Vec<i32>) -> Self {
        FlatArg::Data(v.into_plot_data())
    }
}

impl From<f64> for FlatArg {
    fn from(n: f64) -> Self {
        FlatArg::Num(n)
    }
}

impl From<i32> for FlatArg {
    fn from(n: i32) -> Self {
        FlatArg::Num(n as f64)
    }
}

impl From<&str> for FlatArg {
    fn from(s: &str) -> Self {
        FlatArg::Text(s.to_string())
    }
}

impl From<String> for FlatArg {
    fn from(s: String) -> Self {
        FlatArg::Text(s)
    }
}

/// Split a flat argument list into series records grouped by `stride`.
///
/// Fails with [`PlotError::MalformedSeries`] iff the argument count is not
/// a multiple of the stride width. Slot contents are never rejected here;
/// output order equals input order.
pub fn decode_flat(args: Vec<FlatArg>, stride: Stride) -> PlotResult<Vec<Series>> {
    let width = stride.width();
    if args.len() % width != 0 {
        return Err(PlotError::MalformedSeries {
            len: args.len(),
            stride: width,
        });
    }

    let mut records = Vec::with_capacity(args.len() / width);
    let mut group = Vec::with_capacity(width);
    for arg in args {
        group.push(arg);
        if group.len() < width {
            continue;
        }

        let mut slots = group.drain(..);
        let x = slots.next().unwrap().into_data();
        let y = slots.next().unwrap().into_data();
        let record = match stride {
            Stride::Planar => Series {
                x,
                y,
                z: None,
                extent: None,
                label: slots.next().unwrap().into_label(),
            },
            Stride::Spatial => Series {
                x,
                y,
                z: Some(slots.next().unwrap().into_data()),
                extent: None,
                label: slots.next().unwrap().into_label(),
            },
            Stride::Volumetric => {
                let z = slots.next().unwrap().into_data();
                let dx = slots.next().unwrap().as_scalar();
                let dy = slots.next().unwrap().as_scalar();
                Series {
                    x,
                    y,
                    z: Some(z),
                    extent: Some((dx, dy)),
                    label: slots.next().unwrap().into_label(),
                }
            }
        };
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_decode_produces_one_record_per_group() {
        let args = vec![
            FlatArg::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            FlatArg::from(vec![2.0, 3.0, 5.0, 7.0, 11.0]),
            FlatArg::from("S1"),
        ];
        let records = decode_flat(args, Stride::Planar).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].x, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(records[0].y, vec![2.0, 3.0, 5.0, 7.0, 11.0]);
        assert_eq!(records[0].label, "S1");
        assert!(records[0].z.is_none());
        assert!(records[0].extent.is_none());
    }

    #[test]
    fn decode_preserves_input_order() {
        let args = vec![
            FlatArg::from(vec![1.0]),
            FlatArg::from(vec![2.0]),
            FlatArg::from("first"),
            FlatArg::from(vec![3.0]),
            FlatArg::from(vec![4.0]),
            FlatArg::from("second"),
        ];
        let records = decode_flat(args, Stride::Planar).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, "first");
        assert_eq!(records[1].label, "second");
    }

    #[test]
    fn decode_validates_arity_not_types() {
        // Exactly one group of three scalars: succeeds, contents coerced
        let records =
            decode_flat(vec![1.into(), 2.into(), 3.into()], Stride::Planar).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].x, vec![1.0]);
        assert_eq!(records[0].y, vec![2.0]);
        assert_eq!(records[0].label, "3");

        // Two values cannot form a group of three
        let err = decode_flat(vec![1.into(), 2.into()], Stride::Planar).unwrap_err();
        assert!(matches!(
            err,
            PlotError::MalformedSeries { len: 2, stride: 3 }
        ));
    }

    #[test]
    fn decode_succeeds_iff_len_divisible_by_stride() {
        for len in 0..13 {
            let args: Vec<FlatArg> = (0..len).map(|i| FlatArg::from(i as f64)).collect();
            let result = decode_flat(args, Stride::Spatial);
            if len % 4 == 0 {
                assert_eq!(result.unwrap().len(), len / 4);
            } else {
                assert!(result.is_err());
            }
        }
    }

    #[test]
    fn volumetric_decode_carries_extents() {
        let args = vec![
            FlatArg::from(vec![1.0, 2.0]),
            FlatArg::from(vec![1.0, 2.0]),
            FlatArg::from(vec![3.0, 4.0]),
            FlatArg::from(0.1),
            FlatArg::from(0.2),
            FlatArg::from("bars"),
        ];
        let records = decode_flat(args, Stride::Volumetric).unwrap();
        assert_eq!(records[0].extent, Some((0.1, 0.2)));
        assert_eq!(records[0].z.as_deref(), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn spatial_decode_carries_z() {
        let args = vec![
            FlatArg::from(vec![1.0]),
            FlatArg::from(vec![2.0]),
            FlatArg::from(vec![3.0]),
            FlatArg::from("L"),
        ];
        let records = decode_flat(args, Stride::Spatial).unwrap();
        assert_eq!(records[0].z.as_deref(), Some(&[3.0][..]));
        assert_eq!(records[0].label, "L");
    }
}

//! Error types for quickplot.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The main error type for quickplot operations.
#[derive(Debug)]
pub enum PlotError {
    /// A flat argument list did not divide evenly into series groups.
    MalformedSeries { len: usize, stride: usize },
    /// A renderer required index-aligned arrays and their lengths disagree.
    LengthMismatch {
        label: String,
        expected: usize,
        found: usize,
    },
    /// The resolved palette contains no colors.
    EmptyPalette,
    /// Generic chart dispatch was asked for an unrecognized chart kind.
    UnsupportedChart(String),
    /// Directory creation or image write failed while persisting a canvas.
    Persistence { path: PathBuf, source: io::Error },
    /// A 3D bar was given a negative height or footprint.
    NegativeExtent { label: String, value: f64 },
    /// Error during IO operations (file writing, etc.)
    Io(io::Error),
    /// Invalid data provided for plotting
    InvalidData(String),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// Rendering error
    Render(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::MalformedSeries { len, stride } => write!(
                f,
                "malformed series arguments: {} values do not divide into groups of {}",
                len, stride
            ),
            PlotError::LengthMismatch {
                label,
                expected,
                found,
            } => write!(
                f,
                "series '{}': expected {} values, found {}",
                label, expected, found
            ),
            PlotError::EmptyPalette => write!(f, "palette contains no colors"),
            PlotError::UnsupportedChart(kind) => {
                write!(f, "unsupported chart kind: {}", kind)
            }
            PlotError::Persistence { path, source } => {
                write!(f, "failed to persist plot to {}: {}", path.display(), source)
            }
            PlotError::NegativeExtent { label, value } => write!(
                f,
                "series '{}': 3D bar height/extent must be non-negative, got {}",
                label, value
            ),
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            PlotError::Persistence { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

/// Result type alias for quickplot operations.
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_series() {
        let err = PlotError::LengthMismatch {
            label: "revenue".to_string(),
            expected: 4,
            found: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("revenue"));
        assert!(msg.contains('4'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn persistence_error_carries_io_source() {
        let err = PlotError::Persistence {
            path: PathBuf::from("out/chart.svg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("out/chart.svg"));
    }
}

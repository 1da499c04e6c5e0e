//! Error types for the Tessel engine.
//!
//! Every failure the engine can report is a programming or configuration
//! mistake: the grid is a pure in-memory structure with no I/O and no
//! transient failure modes, so nothing here is ever retried.

use crate::id::Coord;
use std::error::Error;
use std::fmt;

/// Errors raised by grid construction, indexing, and cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid was configured inconsistently: a coordinate or offset
    /// has the wrong dimensionality, the shape is empty, a custom offset
    /// escapes the halo, or a custom neighbourhood was requested through
    /// the preset path.
    Configuration {
        /// What went wrong.
        reason: String,
    },
    /// A declared capability that this engine does not implement
    /// (toroidal wrapping, the Von Neumann preset).
    Unsupported {
        /// Name of the unsupported feature.
        feature: &'static str,
    },
    /// A coordinate lies outside the interior extents, or targets a
    /// halo slot that cannot be written.
    OutOfRange {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// An operation that a halo sentinel cell cannot perform.
    InvalidOperation {
        /// What was attempted.
        reason: &'static str,
    },
}

impl GridError {
    /// Shorthand for a [`GridError::Configuration`] with the given reason.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => write!(f, "invalid configuration: {reason}"),
            Self::Unsupported { feature } => write!(f, "{feature} is not implemented"),
            Self::OutOfRange { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of range: {bounds}")
            }
            Self::InvalidOperation { reason } => write!(f, "invalid operation: {reason}"),
        }
    }
}

impl Error for GridError {}

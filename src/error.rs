//! Error types for cube construction and computation.

use std::fmt;

use thiserror::Error;

/// One of the three cube axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    T,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::T => "t",
        };
        f.write_str(name)
    }
}

/// Precondition violations, always reported before any work starts.
///
/// A window that does not fit (X or Y below 5) is not an error: the
/// interior is simply empty and the input passes through unchanged.
#[derive(Debug, Error)]
pub enum CubeError {
    /// An axis length below 1.
    #[error("invalid {axis} dimension: {value} (must be >= 1)")]
    InvalidDimension { axis: Axis, value: usize },

    /// A flat buffer whose length does not match the requested shape.
    #[error("shape mismatch: expected {expected} cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl CubeError {
    pub fn invalid_dimension(axis: Axis, value: usize) -> Self {
        Self::InvalidDimension { axis, value }
    }

    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }
}

impl From<rayon::ThreadPoolBuildError> for CubeError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, CubeError};

    #[test]
    fn messages_name_the_offending_value() {
        let err = CubeError::invalid_dimension(Axis::T, 0);
        assert_eq!(err.to_string(), "invalid t dimension: 0 (must be >= 1)");

        let err = CubeError::shape_mismatch(24, 23);
        assert_eq!(err.to_string(), "shape mismatch: expected 24 cells, got 23");
    }
}

use thiserror::Error;

/// Errors raised by the vector and matrix constructors and operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A constructor was asked for a zero row or column count.
    #[error("dimensions must be > 0, got ({rows}, {cols})")]
    InvalidDimension { rows: usize, cols: usize },

    /// Operand shapes are incompatible for a binary operation.
    #[error("{op}: incompatible shapes {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Cross product is only defined here for 2 and 3 dimensional vectors.
    #[error("{op}: unsupported vector dimension {len}, expected 2 or 3")]
    UnsupportedDimension { op: &'static str, len: usize },

    /// Rows of a matrix literal have differing lengths.
    #[error("row {row} has {found} elements, expected {expected}")]
    MalformedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A flat buffer does not hold exactly rows * cols elements.
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    BufferLength { rows: usize, cols: usize, len: usize },
}

impl LinalgError {
    pub(crate) fn shape_mismatch(
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    ) -> Self {
        log::debug!("{}: rejecting operands with shapes {:?} and {:?}", op, lhs, rhs);
        LinalgError::ShapeMismatch { op, lhs, rhs }
    }

    pub(crate) fn invalid_dimension(rows: usize, cols: usize) -> Self {
        log::debug!("rejecting zero-sized container ({}, {})", rows, cols);
        LinalgError::InvalidDimension { rows, cols }
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;

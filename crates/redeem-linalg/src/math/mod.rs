//! Dense `f64` containers: `RowVector`, `ColumnVector` and `Matrix`.
//!
//! Storage is a contiguous `Vec<f64>` (row-major for matrices). Shapes are
//! derived from the buffer length, and every constructor rejects zero-sized
//! or ragged input, so an existing container is always well formed.
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::{ColumnVector, RowVector};

/// Inner product of two equal-length slices.
///
/// Accumulates into a single `f64` starting at `0.0`, strictly in index
/// order. Dot, length and matmul all go through here so their results are
/// bit-reproducible; do not replace with `Iterator::sum` or a SIMD/pairwise
/// reduction.
#[inline]
pub(crate) fn dot_slices(lhs: &[f64], rhs: &[f64]) -> f64 {
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter()
        .zip(rhs.iter())
        .fold(0.0, |dot, (&a, &b)| dot + a * b)
}

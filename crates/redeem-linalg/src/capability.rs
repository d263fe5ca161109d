//! Capability contracts shared by the vector and matrix types.
//!
//! `Shaped` and `Scalable` are implemented by every container that carries
//! numbers in a fixed layout. `VectorOps` and `MatrixOps` group the operations
//! that only make sense for one of the two families, so generic code can be
//! written against the contract instead of the concrete type.
use crate::error::Result;

/// A container that reports its dimensions as `(rows, cols)`.
pub trait Shaped {
    fn shape(&self) -> (usize, usize);

    /// Total number of elements.
    fn size(&self) -> usize {
        let (rows, cols) = self.shape();
        rows * cols
    }
}

/// Scalar multiplication, in place or into a new container.
pub trait Scalable: Shaped + Clone {
    /// Multiply every element by `c`, mutating the receiver.
    fn scale_in_place(&mut self, c: f64);

    /// Multiply every element by `c`, leaving the receiver untouched.
    fn scaled(&self, c: f64) -> Self {
        let mut out = self.clone();
        out.scale_in_place(c);
        out
    }
}

/// Operations defined on row vectors.
pub trait VectorOps: Scalable {
    /// Result type of `transpose`.
    type Transposed;

    fn add(&self, rhs: &Self) -> Result<Self>;
    fn minus(&self, rhs: &Self) -> Result<Self>;
    fn dot(&self, rhs: &Self) -> Result<f64>;
    fn cross(&self, rhs: &Self) -> Result<Self>;
    fn length(&self) -> f64;
    fn transpose(&self) -> Self::Transposed;
}

/// Operations defined on matrices.
pub trait MatrixOps: Scalable {
    fn add(&self, rhs: &Self) -> Result<Self>;
    fn minus(&self, rhs: &Self) -> Result<Self>;
    fn matmul(&self, rhs: &Self) -> Result<Self>;
    fn transpose(&self) -> Self;
}

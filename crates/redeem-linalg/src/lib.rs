//! redeem-linalg: small dense linear-algebra primitives.
//!
//! This crate provides row vectors, column vectors and dense matrices of `f64`
//! with shape-checked arithmetic, scalar scaling, dot/cross products,
//! Euclidean length, transposition and matrix multiplication.
//!
//! Every fallible operation returns [`error::Result`]; nothing is mutated or
//! allocated before its shape checks pass. The only mutating operation is
//! in-place scalar multiplication, which has a pure `scaled` counterpart.
//! Shared behaviour is grouped in the [`capability`] traits so generic code
//! can accept any vector or matrix.
pub mod capability;
pub mod config;
pub mod error;
pub mod math;

pub use capability::{MatrixOps, Scalable, Shaped, VectorOps};
pub use config::FormatConfig;
pub use error::{LinalgError, Result};
pub use math::{ColumnVector, Matrix, RowVector};

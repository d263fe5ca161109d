use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use serde::{Deserialize, Serialize};

use crate::capability::{MatrixOps, Scalable, Shaped};
use crate::config::{DisplayWith, FormatConfig, FormatWith};
use crate::error::{LinalgError, Result};
use crate::math::vector::RowVector;

/// A dense r×c matrix of `f64`, stored row-major.
///
/// Only the column count is stored; the row count is derived from the buffer
/// length. Every constructor checks that both are non-zero and that the
/// buffer is rectangular.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    cols: usize,
}

/// Number of elements in an r×c buffer, or `None` when the product overflows
/// or exceeds the largest allocatable `f64` buffer.
fn element_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
        .filter(|&len| len <= isize::MAX as usize / mem::size_of::<f64>())
}

impl Matrix {
    /// An r×c matrix of zeros.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LinalgError::invalid_dimension(rows, cols));
        }
        let len = element_count(rows, cols)
            .ok_or_else(|| LinalgError::invalid_dimension(rows, cols))?;
        Ok(Self {
            data: vec![0.0; len],
            cols,
        })
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut mat = Matrix::new(n, n)?;
        for i in 0..n {
            mat[(i, i)] = 1.0;
        }
        Ok(mat)
    }

    /// Build a matrix from a row-major flat buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(LinalgError::invalid_dimension(rows, cols));
        }
        if element_count(rows, cols) != Some(data.len()) {
            return Err(LinalgError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, cols })
    }

    /// Build a matrix from nested rows. Every row must be as long as the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || cols == 0 {
            return Err(LinalgError::invalid_dimension(nrows, cols));
        }

        let capacity = element_count(nrows, cols)
            .ok_or_else(|| LinalgError::invalid_dimension(nrows, cols))?;
        let mut data = Vec::with_capacity(capacity);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                log::debug!("from_rows: row {} is ragged", idx);
                return Err(LinalgError::MalformedMatrix {
                    row: idx,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, cols })
    }

    pub fn nrows(&self) -> usize {
        self.data.len() / self.cols
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Copy of row `row`.
    pub fn row(&self, row: usize) -> RowVector {
        assert!(row < self.nrows(), "row index out of bounds");
        RowVector::from_nonempty(self.row_slice(row).to_vec())
    }

    /// Column `col`, gathered into a row vector.
    pub fn column(&self, col: usize) -> RowVector {
        assert!(col < self.cols, "column index out of bounds");
        let values = (0..self.nrows())
            .map(|row| self[(row, col)])
            .collect::<Vec<f64>>();
        RowVector::from_nonempty(values)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    pub fn scale_in_place(&mut self, c: f64) {
        for v in self.data.iter_mut() {
            *v *= c;
        }
    }

    pub fn scaled(&self, c: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|v| v * c).collect(),
            cols: self.cols,
        }
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(LinalgError::shape_mismatch(op, self.shape(), other.shape()));
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            cols: self.cols,
        })
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn minus(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "minus", |a, b| a - b)
    }

    /// Matrix product `self · other`.
    ///
    /// Each output cell is the row-vector dot product of a row of `self` and a
    /// column of `other`, so it shares the dot product's accumulation order.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        let (r1, c1) = self.shape();
        let (r2, c2) = other.shape();
        if c1 != r2 {
            return Err(LinalgError::shape_mismatch(
                "matmul",
                self.shape(),
                other.shape(),
            ));
        }
        log::trace!("matmul: ({}, {}) x ({}, {})", r1, c1, r2, c2);

        let columns = (0..c2).map(|j| other.column(j)).collect::<Vec<RowVector>>();
        let mut out = Matrix::new(r1, c2)?;
        for i in 0..r1 {
            let row = self.row(i);
            for (j, column) in columns.iter().enumerate() {
                out[(i, j)] = row.dot(column)?;
            }
        }
        Ok(out)
    }

    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..cols {
            for i in 0..rows {
                data.push(self[(i, j)]);
            }
        }
        Matrix { data, cols: rows }
    }

    /// Render with explicit print options instead of the `Display` defaults.
    pub fn display_with(&self, cfg: &FormatConfig) -> String {
        DisplayWith(self, cfg).to_string()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(value)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(value: Matrix) -> Self {
        value.to_rows()
    }
}

impl From<RowVector> for Matrix {
    fn from(value: RowVector) -> Self {
        let cols = value.len();
        Matrix {
            data: value.into(),
            cols,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_in_place(rhs);
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scaled(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Matrix {
        self.scale_in_place(rhs);
        self
    }
}

impl Shaped for Matrix {
    fn shape(&self) -> (usize, usize) {
        Matrix::shape(self)
    }
}

impl Scalable for Matrix {
    fn scale_in_place(&mut self, c: f64) {
        Matrix::scale_in_place(self, c)
    }

    fn scaled(&self, c: f64) -> Self {
        Matrix::scaled(self, c)
    }
}

impl MatrixOps for Matrix {
    fn add(&self, rhs: &Self) -> Result<Self> {
        Matrix::add(self, rhs)
    }

    fn minus(&self, rhs: &Self) -> Result<Self> {
        Matrix::minus(self, rhs)
    }

    fn matmul(&self, rhs: &Self) -> Result<Self> {
        Matrix::matmul(self, rhs)
    }

    fn transpose(&self) -> Self {
        Matrix::transpose(self)
    }
}

impl FormatWith for Matrix {
    fn fmt_with(&self, out: &mut dyn fmt::Write, cfg: &FormatConfig) -> fmt::Result {
        out.write_char('[')?;
        for i in 0..self.nrows() {
            cfg.write_row(out, self.row_slice(i))?;
            if i + 1 != self.nrows() {
                out.write_str(&cfg.separator)?;
            }
        }
        out.write_char(']')
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &FormatConfig::default())
    }
}

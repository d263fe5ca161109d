use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};
use std::slice::{Iter, IterMut};

use serde::{Deserialize, Serialize};

use crate::capability::{Scalable, Shaped, VectorOps};
use crate::config::{DisplayWith, FormatConfig, FormatWith};
use crate::error::{LinalgError, Result};
use crate::math::dot_slices;

/// A 1×n vector of `f64`. Never empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct RowVector {
    data: Vec<f64>,
}

impl RowVector {
    /// A vector of `len` zeros.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(LinalgError::invalid_dimension(1, len));
        }
        Ok(Self {
            data: vec![0.0; len],
        })
    }

    pub fn from_vec(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinalgError::invalid_dimension(1, 0));
        }
        Ok(Self { data })
    }

    /// Wrap a buffer the caller already knows to be non-empty.
    pub(crate) fn from_nonempty(data: Vec<f64>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; constructors reject empty input.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn shape(&self) -> (usize, usize) {
        (1, self.len())
    }

    pub fn scale_in_place(&mut self, c: f64) {
        for v in self.data.iter_mut() {
            *v *= c;
        }
    }

    pub fn scaled(&self, c: f64) -> RowVector {
        RowVector {
            data: self.data.iter().map(|v| v * c).collect(),
        }
    }

    fn check_same_len(&self, other: &RowVector, op: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::shape_mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }

    /// Element-wise sum.
    pub fn add(&self, other: &RowVector) -> Result<RowVector> {
        self.check_same_len(other, "add")?;
        Ok(RowVector {
            data: self.iter().zip(other.iter()).map(|(a, b)| a + b).collect(),
        })
    }

    /// Element-wise difference `self - other`.
    pub fn minus(&self, other: &RowVector) -> Result<RowVector> {
        self.check_same_len(other, "minus")?;
        Ok(RowVector {
            data: self.iter().zip(other.iter()).map(|(a, b)| a - b).collect(),
        })
    }

    /// Inner product, accumulated left to right.
    pub fn dot(&self, other: &RowVector) -> Result<f64> {
        self.check_same_len(other, "dot")?;
        Ok(dot_slices(self.as_slice(), other.as_slice()))
    }

    /// Cross product of two 2-D or 3-D vectors. The result always has three
    /// components; 2-D inputs are treated as lying in the z = 0 plane.
    pub fn cross(&self, other: &RowVector) -> Result<RowVector> {
        self.check_same_len(other, "cross")?;
        let (a, b) = (self.as_slice(), other.as_slice());
        let data = match a.len() {
            2 => vec![0.0, 0.0, a[0] * b[1] - a[1] * b[0]],
            3 => vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
            len => {
                log::debug!("cross: rejecting {}-dimensional operands", len);
                return Err(LinalgError::UnsupportedDimension { op: "cross", len });
            }
        };
        Ok(RowVector { data })
    }

    /// Euclidean norm.
    pub fn length(&self) -> f64 {
        dot_slices(self.as_slice(), self.as_slice()).sqrt()
    }

    pub fn transpose(&self) -> ColumnVector {
        ColumnVector {
            data: self.data.clone(),
        }
    }

    /// Render with explicit print options instead of the `Display` defaults.
    pub fn display_with(&self, cfg: &FormatConfig) -> String {
        DisplayWith(self, cfg).to_string()
    }
}

impl TryFrom<Vec<f64>> for RowVector {
    type Error = LinalgError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        RowVector::from_vec(value)
    }
}

impl From<RowVector> for Vec<f64> {
    fn from(value: RowVector) -> Self {
        value.data
    }
}

impl Index<usize> for RowVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for RowVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl MulAssign<f64> for RowVector {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_in_place(rhs);
    }
}

impl Mul<f64> for &RowVector {
    type Output = RowVector;

    fn mul(self, rhs: f64) -> RowVector {
        self.scaled(rhs)
    }
}

impl Mul<f64> for RowVector {
    type Output = RowVector;

    fn mul(mut self, rhs: f64) -> RowVector {
        self.scale_in_place(rhs);
        self
    }
}

impl Shaped for RowVector {
    fn shape(&self) -> (usize, usize) {
        RowVector::shape(self)
    }
}

impl Scalable for RowVector {
    fn scale_in_place(&mut self, c: f64) {
        RowVector::scale_in_place(self, c)
    }

    fn scaled(&self, c: f64) -> Self {
        RowVector::scaled(self, c)
    }
}

impl VectorOps for RowVector {
    type Transposed = ColumnVector;

    fn add(&self, rhs: &Self) -> Result<Self> {
        RowVector::add(self, rhs)
    }

    fn minus(&self, rhs: &Self) -> Result<Self> {
        RowVector::minus(self, rhs)
    }

    fn dot(&self, rhs: &Self) -> Result<f64> {
        RowVector::dot(self, rhs)
    }

    fn cross(&self, rhs: &Self) -> Result<Self> {
        RowVector::cross(self, rhs)
    }

    fn length(&self) -> f64 {
        RowVector::length(self)
    }

    fn transpose(&self) -> ColumnVector {
        RowVector::transpose(self)
    }
}

impl FormatWith for RowVector {
    fn fmt_with(&self, out: &mut dyn fmt::Write, cfg: &FormatConfig) -> fmt::Result {
        cfg.write_row(out, self.as_slice())
    }
}

impl fmt::Display for RowVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &FormatConfig::default())
    }
}

/// An n×1 vector, obtained by transposing a `RowVector`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnVector {
    data: Vec<f64>,
}

impl ColumnVector {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The single element of row `row`.
    pub fn get(&self, row: usize) -> Option<f64> {
        self.data.get(row).copied()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.len(), 1)
    }

    pub fn display_with(&self, cfg: &FormatConfig) -> String {
        DisplayWith(self, cfg).to_string()
    }
}

impl Index<usize> for ColumnVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl Shaped for ColumnVector {
    fn shape(&self) -> (usize, usize) {
        ColumnVector::shape(self)
    }
}

impl FormatWith for ColumnVector {
    fn fmt_with(&self, out: &mut dyn fmt::Write, cfg: &FormatConfig) -> fmt::Result {
        out.write_char('[')?;
        for (idx, value) in self.data.iter().enumerate() {
            cfg.write_row(out, std::slice::from_ref(value))?;
            if idx + 1 != self.data.len() {
                out.write_str(&cfg.separator)?;
            }
        }
        out.write_char(']')
    }
}

impl fmt::Display for ColumnVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &FormatConfig::default())
    }
}

//! Dense row-major matrix storage
//!
//! A thin shape-checked wrapper over the flat-slice kernels in
//! [`algorithm::linalg`](crate::algorithm::linalg).

use crate::algorithm::linalg;
use crate::error::{Error, Result};

/// Dense matrix of `f64` values in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::shape_mismatch(&[rows, cols], &[data.len()]));
        }
        Ok(Self { data, rows, cols })
    }

    /// Stack rows, in order, into a matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty row set and
    /// [`Error::ShapeMismatch`] if the rows differ in length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| Error::invalid_argument("rows", "at least one row is required"))?;
        let cols = first.as_ref().len();

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::shape_mismatch(&[cols], &[row.len()]));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Identity matrix of order `n`.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.data[i * n + i] = 1.0;
        }
        matrix
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Underlying row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Matrix {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    /// Matrix product `self @ other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the inner dimensions differ.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::shape_mismatch(
                &[self.cols, other.cols],
                &[other.rows, other.cols],
            ));
        }
        let data = linalg::matmul(&self.data, &other.data, self.rows, self.cols, other.cols);
        Matrix::from_vec(data, self.rows, other.cols)
    }

    /// Matrix-vector product `self @ x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `x` does not match the column
    /// count.
    pub fn matvec(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.cols {
            return Err(Error::shape_mismatch(&[self.cols], &[x.len()]));
        }
        Ok(linalg::matvec(&self.data, x, self.rows, self.cols))
    }

    /// Explicit matrix inverse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] for a non-square matrix and
    /// [`Error::Singular`] if no inverse exists.
    pub fn inverse(&self) -> Result<Matrix> {
        let n = self.require_square()?;
        let data = linalg::invert(&self.data, n, linalg::DEFAULT_PIVOT_EPS)?;
        Matrix::from_vec(data, n, n)
    }

    /// Matrix determinant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] for a non-square matrix.
    pub fn det(&self) -> Result<f64> {
        let n = self.require_square()?;
        Ok(linalg::det(&self.data, n, linalg::DEFAULT_PIVOT_EPS))
    }

    fn require_square(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(Error::shape_mismatch(
                &[self.rows, self.rows],
                &[self.rows, self.cols],
            ));
        }
        Ok(self.rows)
    }
}

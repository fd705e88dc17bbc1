//! Dense row-major matrix type
//!
//! [`DenseMatrix`] owns a single contiguous buffer of `f64` values in
//! row-major order (`data[row * cols + col]`). Each instance owns its storage
//! exclusively; cloning is a deep copy and combining operators never mutate
//! their operands.

use ndarray::Array2;
use rand::Rng;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use thiserror::Error;

/// Errors raised when constructing or combining matrices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("data length mismatch: expected {expected} values, got {got}")]
    InvalidData { expected: usize, got: usize },
    #[error("row count mismatch: {left} rows vs {right} rows")]
    RowCountMismatch { left: usize, right: usize },
}

/// Dense matrix of `f64` values in row-major order
///
/// Equality (`==`) compares dimensions and elements exactly, with no
/// tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Create a zero-initialized matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix from row-major data
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidData`] when `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidData {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from row slices
    ///
    /// # Panics
    ///
    /// Panics when the rows have inconsistent lengths.
    pub fn from_rows(rows: &[&[f64]]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                ncols,
                "row {i} has {} columns, expected {ncols}",
                row.len()
            );
            data.extend_from_slice(row);
        }
        Self {
            rows: nrows,
            cols: ncols,
            data,
        }
    }

    /// Create a column vector (`n x 1`) from a slice
    pub fn from_col(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Create the `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Create a matrix from an ndarray array
    pub fn from_array2(array: &Array2<f64>) -> Self {
        let (rows, cols) = array.dim();
        let mut m = Self::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                m.data[i * cols + j] = array[[i, j]];
            }
        }
        m
    }

    /// Convert to an ndarray array
    pub fn to_array2(&self) -> Array2<f64> {
        let mut array = Array2::zeros((self.rows, self.cols));
        for i in 0..self.rows {
            for j in 0..self.cols {
                array[[i, j]] = self.data[i * self.cols + j];
            }
        }
        array
    }

    /// Overwrite every element with a uniform random value in `[-1, 1)`
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        for value in &mut self.data {
            *value = rng.random_range(-1.0..1.0);
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix has at least one row and one column
    pub fn exists(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }

    /// Element at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics when either index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Set the element at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics when either index is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col] = value;
    }

    /// Row `row` as a slice
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Diagonal elements, `min(rows, cols)` of them
    pub fn diagonal(&self) -> Vec<f64> {
        let n = self.rows.min(self.cols);
        (0..n).map(|i| self.data[i * self.cols + i]).collect()
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        result
    }

    /// Horizontal concatenation `[self | other]`
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RowCountMismatch`] when the row counts differ.
    pub fn augment(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.rows != other.rows {
            return Err(MatrixError::RowCountMismatch {
                left: self.rows,
                right: other.rows,
            });
        }
        let mut result = Self::zeros(self.rows, self.cols + other.cols);
        for i in 0..self.rows {
            let start = i * result.cols;
            result.data[start..start + self.cols].copy_from_slice(self.row(i));
            result.data[start + self.cols..start + result.cols].copy_from_slice(other.row(i));
        }
        Ok(result)
    }

    /// Interchange rows `r1` and `r2`
    ///
    /// Storage is a single contiguous buffer, so this is an element-wise swap
    /// over both row spans, O(cols) rather than the O(1) of a row-pointer
    /// representation.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(r1 * self.cols + j, r2 * self.cols + j);
        }
    }

    /// True for a square matrix
    pub fn is_square(&self) -> bool {
        self.exists() && self.rows == self.cols
    }

    /// True when every element is exactly zero
    pub fn is_null(&self) -> bool {
        self.exists() && self.data.iter().all(|&v| v == 0.0)
    }

    /// True for the identity matrix
    pub fn is_identity(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| {
                (0..self.cols).all(|j| self.get(i, j) == if i == j { 1.0 } else { 0.0 })
            })
    }

    /// True for a square matrix with zero off-diagonal elements
    pub fn is_diagonal(&self) -> bool {
        self.is_square()
            && (0..self.rows)
                .all(|i| (0..self.cols).all(|j| i == j || self.get(i, j) == 0.0))
    }

    /// True when the matrix equals its transpose exactly
    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows)
                .all(|i| (i + 1..self.cols).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// True when each diagonal entry dominates the rest of its row
    ///
    /// Row dominance here is `|a_ii| >= sum_{j != i} |a_ij|`; it is the
    /// sufficient condition favoring convergence of the stationary iterative
    /// solvers.
    pub fn is_diagonally_dominant(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| {
                let off_diagonal: f64 = (0..self.cols)
                    .filter(|&j| j != i)
                    .map(|j| self.get(i, j).abs())
                    .sum();
                self.get(i, i).abs() >= off_diagonal
            })
    }

    /// True when `A * A^T` is exactly the identity
    pub fn is_orthogonal(&self) -> bool {
        self.is_square() && (self * &self.transpose()).is_identity()
    }

    /// Sum of the diagonal elements
    ///
    /// # Panics
    ///
    /// Panics when the matrix is not square.
    pub fn trace(&self) -> f64 {
        assert!(
            self.is_square(),
            "trace requires a square matrix, got {}x{}",
            self.rows,
            self.cols
        );
        self.diagonal().iter().sum()
    }
}

impl Add for &DenseMatrix {
    type Output = DenseMatrix;

    fn add(self, rhs: Self) -> DenseMatrix {
        assert!(
            self.rows == rhs.rows && self.cols == rhs.cols,
            "matrix addition requires equal dimensions: {}x{} vs {}x{}",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );
        DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl Sub for &DenseMatrix {
    type Output = DenseMatrix;

    fn sub(self, rhs: Self) -> DenseMatrix {
        assert!(
            self.rows == rhs.rows && self.cols == rhs.cols,
            "matrix subtraction requires equal dimensions: {}x{} vs {}x{}",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );
        DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

impl Mul<f64> for &DenseMatrix {
    type Output = DenseMatrix;

    fn mul(self, scalar: f64) -> DenseMatrix {
        DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * scalar).collect(),
        }
    }
}

impl Mul for &DenseMatrix {
    type Output = DenseMatrix;

    fn mul(self, rhs: Self) -> DenseMatrix {
        assert_eq!(
            self.cols, rhs.rows,
            "matrix product dimension mismatch: {}x{} * {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols
        );
        let mut result = DenseMatrix::zeros(self.rows, rhs.cols);
        // i-k-j loop order for row-major cache friendliness
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a_ik = self.data[i * self.cols + k];
                for j in 0..rhs.cols {
                    result.data[i * rhs.cols + j] += a_ik * rhs.data[k * rhs.cols + j];
                }
            }
        }
        result
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>12.6}", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Direct solvers for dense linear systems
//!
//! This module provides the non-iterative solution paths for a square system
//! presented as an augmented matrix `[A | b]` of shape `n x (n+1)`:
//! - [`gaussian_elimination`]: reduction to row echelon form with pivoting
//! - [`lu_solve`]: Crout triangular factorization followed by forward and
//!   backward substitution
//!
//! Both paths share [`pivot`] and [`back_substitution`].

mod crout;
mod gauss;

pub use crout::{crout_factorize, lu_solve};
pub use gauss::gaussian_elimination;

use crate::matrix::DenseMatrix;
use thiserror::Error;

/// Errors that can occur while solving a linear system
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No row below the pivot can restore a non-zero divisor, or a triangular
    /// diagonal entry is zero. Distinct from shape errors so callers can
    /// react to singular systems specifically.
    #[error("matrix is singular: no usable pivot in column {column}")]
    Singular { column: usize },
    /// The input is not shaped as an augmented square system.
    #[error("expected an augmented n x (n+1) system, got {rows}x{cols}")]
    NotAugmented { rows: usize, cols: usize },
}

/// Check that `system` is an augmented `n x (n+1)` matrix and return `n`
pub(crate) fn check_augmented(system: &DenseMatrix) -> Result<usize, SolveError> {
    let n = system.rows();
    if n == 0 || system.cols() != n + 1 {
        return Err(SolveError::NotAugmented {
            rows: n,
            cols: system.cols(),
        });
    }
    Ok(n)
}

/// Restore a non-zero entry at `(pivot_row, pivot_row)` by row interchange
///
/// Scans downward from `pivot_row + 1` for the first row whose entry in
/// column `pivot_row` is non-zero and swaps it with `pivot_row`. The search
/// takes the first non-zero entry, not the largest in magnitude; that avoids
/// exact-zero divisors but offers no protection against near-zero pivots.
///
/// # Errors
///
/// Returns [`SolveError::Singular`] when the entire sub-column is zero.
pub fn pivot(matrix: &mut DenseMatrix, pivot_row: usize) -> Result<(), SolveError> {
    let mut i = pivot_row + 1;
    while i < matrix.rows() && matrix.get(i, pivot_row) == 0.0 {
        i += 1;
    }
    if i == matrix.rows() {
        return Err(SolveError::Singular { column: pivot_row });
    }
    log::debug!("interchanging rows {pivot_row} and {i} to restore a non-zero pivot");
    matrix.swap_rows(pivot_row, i);
    Ok(())
}

/// Solve an upper-triangular augmented system `[U | y]` by reverse substitution
///
/// Computes `x[i] = (y[i] - sum_{j>i} U[i][j] * x[j]) / U[i][i]` from the last
/// row upward. Entries below the diagonal are ignored.
///
/// # Errors
///
/// Returns [`SolveError::Singular`] when a diagonal entry is zero and
/// [`SolveError::NotAugmented`] when the shape is not `n x (n+1)`.
pub fn back_substitution(upper: &DenseMatrix) -> Result<DenseMatrix, SolveError> {
    let n = check_augmented(upper)?;
    let mut x = DenseMatrix::zeros(n, 1);
    for i in (0..n).rev() {
        let diagonal = upper.get(i, i);
        if diagonal == 0.0 {
            return Err(SolveError::Singular { column: i });
        }
        let mut sum = 0.0;
        for j in i + 1..n {
            sum += upper.get(i, j) * x.get(j, 0);
        }
        x.set(i, 0, (upper.get(i, n) - sum) / diagonal);
    }
    Ok(x)
}

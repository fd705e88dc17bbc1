//! Gaussian elimination solver

use super::{back_substitution, check_augmented, pivot, SolveError};
use crate::matrix::DenseMatrix;

/// Solve an augmented system `[A | b]` by Gaussian elimination
///
/// Reduces a working copy to row echelon form by sequential elimination,
/// invoking [`pivot`] whenever a diagonal entry is exactly zero, then applies
/// [`back_substitution`]. The input is never mutated.
///
/// # Errors
///
/// Returns [`SolveError::Singular`] for an unpivotable system and
/// [`SolveError::NotAugmented`] when the shape is not `n x (n+1)`.
pub fn gaussian_elimination(system: &DenseMatrix) -> Result<DenseMatrix, SolveError> {
    let n = check_augmented(system)?;
    let mut work = system.clone();

    for k in 0..n {
        if work.get(k, k) == 0.0 {
            pivot(&mut work, k)?;
        }
        let pivot_value = work.get(k, k);
        for i in k + 1..n {
            let factor = work.get(i, k) / pivot_value;
            if factor == 0.0 {
                continue;
            }
            // Eliminate column k of row i, carrying the right-hand side along.
            for j in k..=n {
                work.set(i, j, work.get(i, j) - factor * work.get(k, j));
            }
        }
    }

    back_substitution(&work)
}

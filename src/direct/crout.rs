//! Crout triangular factorization and the LU solution path

use super::{back_substitution, check_augmented, pivot, SolveError};
use crate::matrix::DenseMatrix;

/// Factorize the coefficient block of `[A | b]` by Crout's method
///
/// Returns a matrix of the same shape as the input. The left `n x n` block
/// holds `L` on and below the diagonal and `U` strictly above it; `U`'s
/// diagonal is implicitly 1 and not stored. The last column carries the
/// right-hand side with any pivot row interchanges applied, so a subsequent
/// forward substitution sees `b` in the same row order as `L`.
///
/// For each pivot column `k` the column of `L` is computed first; if the
/// resulting diagonal entry is exactly zero, [`pivot`] interchanges full rows
/// (right-hand side included), which is sound because a row swap below `k`
/// commutes with the elimination already performed.
///
/// # Errors
///
/// Returns [`SolveError::Singular`] for an unpivotable column and
/// [`SolveError::NotAugmented`] when the shape is not `n x (n+1)`.
pub fn crout_factorize(system: &DenseMatrix) -> Result<DenseMatrix, SolveError> {
    let n = check_augmented(system)?;
    let mut lu = system.clone();

    for k in 0..n {
        // L[i][k] = A[i][k] - sum_{j<k} L[i][j] * U[j][k]
        for i in k..n {
            let mut sum = 0.0;
            for j in 0..k {
                sum += lu.get(i, j) * lu.get(j, k);
            }
            lu.set(i, k, lu.get(i, k) - sum);
        }

        if lu.get(k, k) == 0.0 {
            pivot(&mut lu, k)?;
        }

        // U[k][j] = (A[k][j] - sum_{i<k} L[k][i] * U[i][j]) / L[k][k]
        let diagonal = lu.get(k, k);
        for j in k + 1..n {
            let mut sum = 0.0;
            for i in 0..k {
                sum += lu.get(k, i) * lu.get(i, j);
            }
            lu.set(k, j, (lu.get(k, j) - sum) / diagonal);
        }
    }

    Ok(lu)
}

/// Solve an augmented system `[A | b]` via Crout factorization
///
/// Factorizes with [`crout_factorize`], forward-substitutes the intermediate
/// vector `z[i] = (b[i] - sum_{j<i} L[i][j] * z[j]) / L[i][i]` against the
/// carried right-hand side, reassembles the unit-diagonal upper-triangular
/// system `[U | z]`, and finishes with [`back_substitution`]. The input is
/// never mutated.
///
/// # Errors
///
/// Returns [`SolveError::Singular`] for an unpivotable system and
/// [`SolveError::NotAugmented`] when the shape is not `n x (n+1)`.
pub fn lu_solve(system: &DenseMatrix) -> Result<DenseMatrix, SolveError> {
    let n = check_augmented(system)?;
    let factor = crout_factorize(system)?;

    let mut z = DenseMatrix::zeros(n, 1);
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..i {
            sum += factor.get(i, j) * z.get(j, 0);
        }
        z.set(i, 0, (factor.get(i, n) - sum) / factor.get(i, i));
    }

    let mut upper = DenseMatrix::zeros(n, n + 1);
    for i in 0..n {
        upper.set(i, i, 1.0);
        for j in i + 1..n {
            upper.set(i, j, factor.get(i, j));
        }
        upper.set(i, n, z.get(i, 0));
    }

    back_substitution(&upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::gaussian_elimination;
    use approx::assert_relative_eq;

    #[test]
    fn test_factorization_entries() {
        let system = DenseMatrix::from_rows(&[&[4.0, 1.0, 1.0], &[2.0, 3.0, 2.0]]);
        let lu = crout_factorize(&system).unwrap();

        // L = [[4, 0], [2, 2.5]], U = [[1, 0.25], [0, 1]]
        assert_relative_eq!(lu.get(0, 0), 4.0);
        assert_relative_eq!(lu.get(1, 0), 2.0);
        assert_relative_eq!(lu.get(1, 1), 2.5);
        assert_relative_eq!(lu.get(0, 1), 0.25);
        // Right-hand side carried through untouched (no pivoting here)
        assert_relative_eq!(lu.get(0, 2), 1.0);
        assert_relative_eq!(lu.get(1, 2), 2.0);
    }

    #[test]
    fn test_factorization_reconstructs_coefficients() {
        let a = DenseMatrix::from_rows(&[
            &[10.0, 2.0, 1.0],
            &[1.0, 5.0, 1.0],
            &[2.0, 3.0, 10.0],
        ]);
        let b = DenseMatrix::from_col(&[9.0, -8.0, 27.0]);
        let system = a.augment(&b).unwrap();

        let factor = crout_factorize(&system).unwrap();
        let n = 3;

        let mut lower = DenseMatrix::zeros(n, n);
        let mut upper = DenseMatrix::identity(n);
        for i in 0..n {
            for j in 0..=i {
                lower.set(i, j, factor.get(i, j));
            }
            for j in i + 1..n {
                upper.set(i, j, factor.get(i, j));
            }
        }

        let product = &lower * &upper;
        for i in 0..n {
            for j in 0..n {
                assert_relative_eq!(product.get(i, j), a.get(i, j), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_two_by_two_system() {
        let system = DenseMatrix::from_rows(&[&[4.0, 1.0, 1.0], &[2.0, 3.0, 2.0]]);
        let x = lu_solve(&system).unwrap();
        assert_relative_eq!(x.get(0, 0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(x.get(1, 0), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_diagonal_recovers_by_pivoting() {
        let system = DenseMatrix::from_rows(&[&[0.0, 1.0, 1.0], &[1.0, 0.0, 1.0]]);
        let x = lu_solve(&system).unwrap();
        assert_relative_eq!(x.get(0, 0), 1.0);
        assert_relative_eq!(x.get(1, 0), 1.0);
    }

    #[test]
    fn test_agrees_with_gaussian_elimination() {
        let a = DenseMatrix::from_rows(&[
            &[6.0, -2.0, 1.0, 0.5],
            &[1.0, 7.0, -1.0, 2.0],
            &[-2.0, 1.0, 8.0, 1.0],
            &[0.5, 1.0, 1.0, 5.0],
        ]);
        let b = DenseMatrix::from_col(&[3.0, -4.0, 12.0, 7.5]);
        let system = a.augment(&b).unwrap();

        let by_lu = lu_solve(&system).unwrap();
        let by_elimination = gaussian_elimination(&system).unwrap();

        for i in 0..4 {
            assert_relative_eq!(by_lu.get(i, 0), by_elimination.get(i, 0), epsilon = 1e-9);
        }

        let ax = &a * &by_lu;
        for i in 0..4 {
            assert_relative_eq!(ax.get(i, 0), b.get(i, 0), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_singular_system_is_an_error() {
        let system = DenseMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]]);
        assert_eq!(
            lu_solve(&system),
            Err(SolveError::Singular { column: 1 })
        );
    }

    #[test]
    fn test_rejects_non_augmented_input() {
        let wide = DenseMatrix::zeros(2, 4);
        assert_eq!(
            crout_factorize(&wide),
            Err(SolveError::NotAugmented { rows: 2, cols: 4 })
        );
    }
}

//! Gauss-Seidel solver
//!
//! Each sweep updates the components in index order, so later components see
//! the values already updated in the same sweep. Converges roughly twice as
//! fast as Jacobi when both converge.

use crate::direct::{check_augmented, SolveError};
use crate::matrix::DenseMatrix;
use ndarray::Array1;

/// Gauss-Seidel solver configuration
#[derive(Debug, Clone)]
pub struct GaussSeidelConfig {
    /// Maximum number of sweeps
    pub max_iterations: usize,
    /// Convergence threshold on the maximum component change per sweep
    pub tolerance: f64,
    /// Print progress every N sweeps (0 = no output)
    pub print_interval: usize,
}

impl Default for GaussSeidelConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-10,
            print_interval: 0,
        }
    }
}

/// Gauss-Seidel solver result
#[derive(Debug)]
pub struct GaussSeidelSolution {
    /// Last computed iterate as an `n x 1` column
    pub x: DenseMatrix,
    /// Number of sweeps performed
    pub iterations: usize,
    /// Maximum component change of the final sweep
    pub max_delta: f64,
    /// Whether the change fell below the tolerance within the cap
    pub converged: bool,
}

/// Solve an augmented system `[A | b]` by Gauss-Seidel iteration
///
/// Starts from the zero vector and updates each component in place with
/// `x[i] = (b[i] - sum_{j != i} A[i][j] * x[j]) / A[i][i]`, using the most
/// recently updated values of the other components. Iterates until the
/// maximum component change of a sweep falls below `config.tolerance` or the
/// cap is reached; a capped run returns the last iterate with
/// `converged: false`.
///
/// # Errors
///
/// Returns [`SolveError::NotAugmented`] when the shape is not `n x (n+1)`;
/// no numerical condition is an error.
pub fn gauss_seidel(
    system: &DenseMatrix,
    config: &GaussSeidelConfig,
) -> Result<GaussSeidelSolution, SolveError> {
    let n = check_augmented(system)?;
    let mut x = Array1::<f64>::zeros(n);
    let mut max_delta = f64::INFINITY;

    for iter in 0..config.max_iterations {
        max_delta = 0.0;
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if j != i {
                    sum += system.get(i, j) * x[j];
                }
            }
            let updated = (system.get(i, n) - sum) / system.get(i, i);
            let delta = (updated - x[i]).abs();
            if delta > max_delta {
                max_delta = delta;
            }
            x[i] = updated;
        }

        if config.print_interval > 0 && (iter + 1) % config.print_interval == 0 {
            log::info!(
                "Gauss-Seidel sweep {}: max component change = {:.6e}",
                iter + 1,
                max_delta
            );
        }

        if max_delta < config.tolerance {
            return Ok(GaussSeidelSolution {
                x: DenseMatrix::from_col(&x.to_vec()),
                iterations: iter + 1,
                max_delta,
                converged: true,
            });
        }
    }

    Ok(GaussSeidelSolution {
        x: DenseMatrix::from_col(&x.to_vec()),
        iterations: config.max_iterations,
        max_delta,
        converged: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::gaussian_elimination;
    use approx::assert_relative_eq;

    #[test]
    fn test_diagonally_dominant_system() {
        let system = DenseMatrix::from_rows(&[&[4.0, 1.0, 1.0], &[2.0, 3.0, 2.0]]);
        assert!(DenseMatrix::from_rows(&[&[4.0, 1.0], &[2.0, 3.0]]).is_diagonally_dominant());

        let solution = gauss_seidel(&system, &GaussSeidelConfig::default()).unwrap();

        assert!(solution.converged);
        assert!(solution.iterations < 100);
        assert_relative_eq!(solution.x.get(0, 0), 0.1, epsilon = 1e-8);
        assert_relative_eq!(solution.x.get(1, 0), 0.6, epsilon = 1e-8);
    }

    #[test]
    fn test_agrees_with_direct_solver() {
        let a = DenseMatrix::from_rows(&[
            &[10.0, 2.0, 1.0],
            &[1.0, 5.0, 1.0],
            &[2.0, 3.0, 10.0],
        ]);
        let b = DenseMatrix::from_col(&[9.0, -8.0, 27.0]);
        let system = a.augment(&b).unwrap();

        let direct = gaussian_elimination(&system).unwrap();
        let iterative = gauss_seidel(&system, &GaussSeidelConfig::default()).unwrap();

        assert!(iterative.converged);
        for i in 0..3 {
            assert_relative_eq!(iterative.x.get(i, 0), direct.get(i, 0), epsilon = 1e-8);
        }
    }

    #[test]
    fn test_divergence_reports_capped_run() {
        // Not diagonally dominant; the sweep amplifies the error
        let system = DenseMatrix::from_rows(&[&[1.0, 3.0, 1.0], &[4.0, 1.0, 2.0]]);
        let config = GaussSeidelConfig {
            max_iterations: 25,
            ..GaussSeidelConfig::default()
        };

        let solution = gauss_seidel(&system, &config).unwrap();

        assert!(!solution.converged);
        assert_eq!(solution.iterations, 25);
        assert!(solution.max_delta >= config.tolerance);
    }

    #[test]
    fn test_rejects_non_augmented_input() {
        let square = DenseMatrix::identity(3);
        assert!(matches!(
            gauss_seidel(&square, &GaussSeidelConfig::default()),
            Err(SolveError::NotAugmented { rows: 3, cols: 3 })
        ));
    }
}

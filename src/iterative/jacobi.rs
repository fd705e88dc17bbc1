//! Gauss-Jacobi solver
//!
//! Each sweep is computed entirely from the previous iterate, which requires
//! an explicit copy per sweep but makes the update order irrelevant.

use crate::direct::{check_augmented, SolveError};
use crate::matrix::DenseMatrix;
use ndarray::Array1;

/// Jacobi solver configuration
#[derive(Debug, Clone)]
pub struct JacobiConfig {
    /// Maximum number of sweeps
    pub max_iterations: usize,
    /// Convergence threshold on the maximum component change per sweep
    pub tolerance: f64,
    /// Print progress every N sweeps (0 = no output)
    pub print_interval: usize,
}

impl Default for JacobiConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-10,
            print_interval: 0,
        }
    }
}

/// Jacobi solver result
#[derive(Debug)]
pub struct JacobiSolution {
    /// Last computed iterate as an `n x 1` column
    pub x: DenseMatrix,
    /// Number of sweeps performed
    pub iterations: usize,
    /// Maximum component change of the final sweep
    pub max_delta: f64,
    /// Whether the change fell below the tolerance within the cap
    pub converged: bool,
}

/// Solve an augmented system `[A | b]` by Gauss-Jacobi iteration
///
/// Same update as Gauss-Seidel, `x[i] = (b[i] - sum_{j != i} A[i][j] * x[j])
/// / A[i][i]`, but every component of a sweep reads the previous full
/// iterate. A capped run returns the last iterate with `converged: false`.
///
/// # Errors
///
/// Returns [`SolveError::NotAugmented`] when the shape is not `n x (n+1)`;
/// no numerical condition is an error.
pub fn jacobi(
    system: &DenseMatrix,
    config: &JacobiConfig,
) -> Result<JacobiSolution, SolveError> {
    let n = check_augmented(system)?;
    let mut x = Array1::<f64>::zeros(n);
    let mut max_delta = f64::INFINITY;

    for iter in 0..config.max_iterations {
        let previous = x.clone();
        max_delta = 0.0;
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if j != i {
                    sum += system.get(i, j) * previous[j];
                }
            }
            let updated = (system.get(i, n) - sum) / system.get(i, i);
            let delta = (updated - previous[i]).abs();
            if delta > max_delta {
                max_delta = delta;
            }
            x[i] = updated;
        }

        if config.print_interval > 0 && (iter + 1) % config.print_interval == 0 {
            log::info!(
                "Jacobi sweep {}: max component change = {:.6e}",
                iter + 1,
                max_delta
            );
        }

        if max_delta < config.tolerance {
            return Ok(JacobiSolution {
                x: DenseMatrix::from_col(&x.to_vec()),
                iterations: iter + 1,
                max_delta,
                converged: true,
            });
        }
    }

    Ok(JacobiSolution {
        x: DenseMatrix::from_col(&x.to_vec()),
        iterations: config.max_iterations,
        max_delta,
        converged: false,
    })
}

//! Iterative solvers for dense linear systems
//!
//! Stationary methods for an augmented square system `[A | b]`:
//! - [`gauss_seidel`]: sweeps in index order using the freshest values
//! - [`jacobi`]: sweeps entirely from the previous iterate
//!
//! Convergence is not guaranteed for arbitrary systems; diagonal dominance of
//! the coefficient block favors it. Hitting the iteration cap is reported
//! through the solution's `converged` flag, never as an error.

mod gauss_seidel;
mod jacobi;

pub use gauss_seidel::{gauss_seidel, GaussSeidelConfig, GaussSeidelSolution};
pub use jacobi::{jacobi, JacobiConfig, JacobiSolution};

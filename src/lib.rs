//! Dense real-valued matrices and linear-system solvers
//!
//! This crate provides a row-major dense matrix type together with direct and
//! iterative solvers for square systems of linear equations presented as an
//! augmented matrix `[A | b]`.
//!
//! # Features
//!
//! - **DenseMatrix**: arithmetic operators, transpose, augmentation, row
//!   interchange, structural predicates, exact equality
//! - **Direct Solvers**: Gaussian elimination and Crout LU factorization,
//!   with partial pivoting and typed singular-system errors
//! - **Iterative Solvers**: Gauss-Seidel and Gauss-Jacobi with configurable
//!   convergence threshold and iteration cap
//! - **Matrix I/O**: plain-text read/write of matrices
//!
//! # Example
//!
//! ```ignore
//! use dense_solvers::{gaussian_elimination, DenseMatrix};
//!
//! // [A | b] for 4x + y = 1, 2x + 3y = 2
//! let system = DenseMatrix::from_rows(&[&[4.0, 1.0, 1.0], &[2.0, 3.0, 2.0]]);
//! let x = gaussian_elimination(&system)?;
//! assert!((x.get(0, 0) - 0.1).abs() < 1e-12);
//! ```

pub mod direct;
pub mod io;
pub mod iterative;
pub mod matrix;

// Re-export main types
pub use matrix::{DenseMatrix, MatrixError};

// Re-export direct solvers and their building blocks
pub use direct::{
    SolveError, back_substitution, crout_factorize, gaussian_elimination, lu_solve, pivot,
};

// Re-export iterative solvers
pub use iterative::{
    GaussSeidelConfig, GaussSeidelSolution, JacobiConfig, JacobiSolution, gauss_seidel, jacobi,
};

// Re-export matrix I/O
pub use io::{ReadError, read_matrix, read_matrix_path, write_matrix, write_matrix_path};

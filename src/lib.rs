//! # linr
//!
//! **Small dense linear algebra: solve square systems the way they were written down.**
//!
//! linr accepts linear equations in whatever numeric representation the caller
//! already has, normalizes them into a coefficient matrix `A` and a
//! right-hand-side vector `b`, and solves `A·x = b` by explicit matrix
//! inversion followed by a matrix-vector multiply.
//!
//! ## Features
//!
//! - **Equations**: one uniform [`Equation`](equation::Equation) type fed by
//!   [`IntoEquation`](equation::IntoEquation) conversions from vectors,
//!   slices, and arrays of any primitive numeric type
//! - **Solving**: LU factorization with partial pivoting, explicit inverse,
//!   typed singular-matrix and shape errors
//! - **Matrices**: dense row-major `f64` storage with matmul, matvec,
//!   transpose, inverse, determinant
//! - **Valuation**: declining-balance vehicle depreciation and tax-claim
//!   arithmetic, with the `carclaim` interactive binary
//!
//! ## Quick Start
//!
//! ```rust
//! use linr::solve_system;
//!
//! // x + y = 10
//! // x - y = 2
//! let x = solve_system(vec![vec![1.0, 1.0, 10.0], vec![1.0, -1.0, 2.0]])?;
//!
//! assert!((x[0] - 6.0).abs() < 1e-9);
//! assert!((x[1] - 4.0).abs() < 1e-9);
//! # Ok::<(), linr::error::Error>(())
//! ```
//!
//! ## Numerical behavior
//!
//! The solver computes `x = A⁻¹·b` rather than running a decomposition-based
//! direct solve. Exactly dependent rows fail with
//! [`Error::Singular`](error::Error::Singular); merely ill-conditioned
//! systems succeed and surface as loss of accuracy in `x`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod equation;
pub mod error;
pub mod matrix;
pub mod system;
pub mod valuation;

pub use system::solve_system;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::equation::{Equation, IntoEquation};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::system::{solve_system, LinearSystem};
    pub use crate::valuation::Vehicle;
}

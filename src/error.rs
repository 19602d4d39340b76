//! Error types for linr

use thiserror::Error;

/// Result type alias using linr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in linr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Coefficient matrix has no inverse
    #[error("Singular matrix: no usable pivot in column {column}")]
    Singular {
        /// Column in which elimination found no nonzero pivot
        column: usize,
    },

    /// An input element has no `f64` representation
    #[error("Cannot coerce element {index} to f64: {reason}")]
    TypeCoercion {
        /// Position of the offending element within its equation
        index: usize,
        /// Reason for failure
        reason: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

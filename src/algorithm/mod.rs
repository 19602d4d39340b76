//! Numerical kernels
//!
//! Kernels operate on flat row-major `f64` slices with explicit dimensions;
//! [`Matrix`](crate::matrix::Matrix) provides the shape-checked entry points
//! on top of them.

pub mod linalg;

//! Linear system assembly and solving
//!
//! The pipeline runs in a fixed order: normalize each incoming equation,
//! split coefficient rows from right-hand-side constants, stack both into
//! `A` and `b`, then compute `x = A⁻¹·b`.

use crate::equation::{Equation, IntoEquation};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// An ordered collection of equations forming a system `A·x = b`.
///
/// Equations are normalized as they are added, so a system can mix input
/// representations across `push` calls. Uniform length is enforced on entry;
/// squareness is only required at [`solve`](LinearSystem::solve) time.
#[derive(Debug, Clone, Default)]
pub struct LinearSystem {
    equations: Vec<Equation>,
}

impl LinearSystem {
    /// Empty system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a system from an ordered sequence of equation-like values.
    ///
    /// # Errors
    ///
    /// Propagates normalization failures and returns
    /// [`Error::ShapeMismatch`] if the equations differ in length.
    pub fn from_equations<I>(equations: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoEquation,
    {
        let mut system = Self::new();
        for equation in equations {
            system.push(equation)?;
        }
        Ok(system)
    }

    /// Normalize and append one equation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the equation's length differs
    /// from the first equation's, plus any normalization error.
    pub fn push(&mut self, equation: impl IntoEquation) -> Result<()> {
        let equation = equation.into_equation()?;
        if let Some(first) = self.equations.first() {
            if equation.terms().len() != first.terms().len() {
                return Err(Error::shape_mismatch(
                    &[first.terms().len()],
                    &[equation.terms().len()],
                ));
            }
        }
        self.equations.push(equation);
        Ok(())
    }

    /// Number of equations.
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// True when no equation has been added.
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Number of unknowns, i.e. columns of the coefficient matrix.
    pub fn unknowns(&self) -> usize {
        self.equations.first().map_or(0, Equation::unknowns)
    }

    /// Equations in input order.
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// Stack the coefficient rows, in input order, into the M×N matrix `A`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty system.
    pub fn coefficient_matrix(&self) -> Result<Matrix> {
        let rows: Vec<&[f64]> = self.equations.iter().map(Equation::coefficients).collect();
        Matrix::from_rows(&rows)
    }

    /// Right-hand-side constants, in input order.
    pub fn rhs_vector(&self) -> Vec<f64> {
        self.equations.iter().map(Equation::rhs).collect()
    }

    /// Solve `A·x = b` by explicit inversion: `x = A⁻¹·b`.
    ///
    /// `x[i]` is the value of the unknown multiplying coefficient column i;
    /// reordering the equations does not reorder the solution.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an empty system
    /// - [`Error::ShapeMismatch`] if the system is not square (M ≠ N)
    /// - [`Error::Singular`] if the coefficient matrix has no inverse
    pub fn solve(&self) -> Result<Vec<f64>> {
        if self.equations.is_empty() {
            return Err(Error::invalid_argument(
                "equations",
                "system has no equations",
            ));
        }

        let m = self.equations.len();
        let n = self.unknowns();
        if m != n {
            return Err(Error::shape_mismatch(&[n, n], &[m, n]));
        }

        let a = self.coefficient_matrix()?;
        let b = self.rhs_vector();

        let inverse = a.inverse()?;
        inverse.matvec(&b)
    }
}

/// Solve an ordered sequence of equation-like values in one call.
///
/// Each element carries N coefficients followed by the right-hand-side
/// constant; the number of equations must equal N.
///
/// ```rust
/// use linr::solve_system;
///
/// // 2x = 4, 3y = 9
/// let x = solve_system(vec![vec![2.0, 0.0, 4.0], vec![0.0, 3.0, 9.0]])?;
/// assert!((x[0] - 2.0).abs() < 1e-9);
/// assert!((x[1] - 3.0).abs() < 1e-9);
/// # Ok::<(), linr::error::Error>(())
/// ```
///
/// # Errors
///
/// See [`LinearSystem::solve`].
pub fn solve_system<I>(equations: I) -> Result<Vec<f64>>
where
    I: IntoIterator,
    I::Item: IntoEquation,
{
    LinearSystem::from_equations(equations)?.solve()
}

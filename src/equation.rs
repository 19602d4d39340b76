//! Equation representation and input normalization
//!
//! Callers hand equations over in whatever shape they already have: an
//! [`Equation`], a `Vec` or slice of any primitive numeric type, or a
//! fixed-size array. [`IntoEquation`] funnels all of them into the single
//! internal representation before any matrix is assembled, so nothing
//! downstream branches on input type.

use num_traits::ToPrimitive;

use crate::error::{Error, Result};

/// One linear equation in N unknowns.
///
/// Stored as N+1 terms: the first N are coefficients, the last is the
/// right-hand-side constant. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    terms: Vec<f64>,
}

impl Equation {
    /// Create an equation from its coefficient row and right-hand side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `coefficients` is empty.
    pub fn new(coefficients: Vec<f64>, rhs: f64) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::invalid_argument(
                "coefficients",
                "equation needs at least one coefficient",
            ));
        }
        let mut terms = coefficients;
        terms.push(rhs);
        Ok(Self { terms })
    }

    /// Create an equation from its N+1 raw terms, coefficients first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if fewer than two terms are given
    /// (one coefficient plus the constant is the minimum).
    pub fn from_terms(terms: Vec<f64>) -> Result<Self> {
        if terms.len() < 2 {
            return Err(Error::invalid_argument(
                "terms",
                "equation needs at least one coefficient and a right-hand side",
            ));
        }
        Ok(Self { terms })
    }

    /// Coerce an ordered sequence of numeric values into an equation.
    ///
    /// Values already of type `f64` pass through unchanged; other numeric
    /// types are widened element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeCoercion`] if an element has no `f64`
    /// representation, [`Error::InvalidArgument`] if the sequence is shorter
    /// than two elements.
    pub fn try_from_iter<I>(values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: ToPrimitive,
    {
        let mut terms = Vec::new();
        for (index, value) in values.into_iter().enumerate() {
            let term = value.to_f64().ok_or_else(|| Error::TypeCoercion {
                index,
                reason: "value has no f64 representation".to_string(),
            })?;
            terms.push(term);
        }
        Self::from_terms(terms)
    }

    /// Number of unknowns (terms minus the constant).
    pub fn unknowns(&self) -> usize {
        self.terms.len() - 1
    }

    /// Coefficient row, one entry per unknown.
    pub fn coefficients(&self) -> &[f64] {
        &self.terms[..self.terms.len() - 1]
    }

    /// Right-hand-side constant.
    pub fn rhs(&self) -> f64 {
        self.terms[self.terms.len() - 1]
    }

    /// All N+1 terms, coefficients first.
    pub fn terms(&self) -> &[f64] {
        &self.terms
    }
}

/// Conversion into the uniform [`Equation`] representation.
///
/// The normalization seam of the crate: every accepted input shape passes
/// through exactly one `into_equation` call. An `Equation` passes through
/// untouched; sequences of numeric values are coerced element-wise without
/// altering values that are already `f64`.
pub trait IntoEquation {
    /// Convert `self` into an [`Equation`].
    fn into_equation(self) -> Result<Equation>;
}

impl IntoEquation for Equation {
    fn into_equation(self) -> Result<Equation> {
        Ok(self)
    }
}

impl<'a> IntoEquation for &'a Equation {
    fn into_equation(self) -> Result<Equation> {
        Ok(self.clone())
    }
}

impl<T: ToPrimitive> IntoEquation for Vec<T> {
    fn into_equation(self) -> Result<Equation> {
        Equation::try_from_iter(self)
    }
}

impl<'a, T: ToPrimitive + Copy> IntoEquation for &'a [T] {
    fn into_equation(self) -> Result<Equation> {
        Equation::try_from_iter(self.iter().copied())
    }
}

impl<T: ToPrimitive, const N: usize> IntoEquation for [T; N] {
    fn into_equation(self) -> Result<Equation> {
        Equation::try_from_iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_coefficients_and_rhs() {
        let eq = Equation::from_terms(vec![1.0, -1.0, 2.0]).unwrap();
        assert_eq!(eq.unknowns(), 2);
        assert_eq!(eq.coefficients(), &[1.0, -1.0]);
        assert_eq!(eq.rhs(), 2.0);
    }

    #[test]
    fn integer_input_is_widened() {
        let eq = vec![1i32, 1, 10].into_equation().unwrap();
        assert_eq!(eq.terms(), &[1.0, 1.0, 10.0]);
    }

    #[test]
    fn equation_passes_through_unchanged() {
        let original = Equation::new(vec![2.0, 0.0], 4.0).unwrap();
        let converted = original.clone().into_equation().unwrap();
        assert_eq!(converted, original);
    }

    #[test]
    fn slice_and_array_inputs_convert() {
        let slice: &[f64] = &[2.0, 0.0, 4.0];
        assert_eq!(slice.into_equation().unwrap().rhs(), 4.0);
        assert_eq!([0u8, 3, 9].into_equation().unwrap().coefficients(), &[0.0, 3.0]);
    }

    #[test]
    fn too_short_input_is_rejected() {
        let err = Equation::from_terms(vec![1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn uncoercible_element_reports_position() {
        struct NotANumber;

        impl ToPrimitive for NotANumber {
            fn to_i64(&self) -> Option<i64> {
                None
            }
            fn to_u64(&self) -> Option<u64> {
                None
            }
            fn to_f64(&self) -> Option<f64> {
                None
            }
        }

        let err = Equation::try_from_iter(vec![NotANumber, NotANumber]).unwrap_err();
        match err {
            Error::TypeCoercion { index, .. } => assert_eq!(index, 0),
            other => panic!("expected TypeCoercion, got {other:?}"),
        }
    }
}

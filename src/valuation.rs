//! Vehicle depreciation and tax-claim arithmetic
//!
//! Declining-balance depreciation: a vehicle worth `V` at its last valuation
//! is worth `V·(1 − rate)^years` after `years` further years. The claimable
//! amount for a year is the business-use share of the value lost over that
//! year.

use crate::error::{Error, Result};

/// A vehicle whose value declines by a fixed fraction each year.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    initial_value: f64,
    depreciation_rate: f64,
    business_fraction: f64,
    years_since_valuation: f64,
}

impl Vehicle {
    /// Describe a vehicle by its value at last valuation, yearly
    /// depreciation rate, business-use fraction, and years elapsed since
    /// the valuation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the value or elapsed years are
    /// negative or non-finite, or if either fraction falls outside
    /// `0.0..=1.0`.
    pub fn new(
        initial_value: f64,
        depreciation_rate: f64,
        business_fraction: f64,
        years_since_valuation: f64,
    ) -> Result<Self> {
        if !initial_value.is_finite() || initial_value < 0.0 {
            return Err(Error::invalid_argument(
                "initial_value",
                "must be finite and non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&depreciation_rate) {
            return Err(Error::invalid_argument(
                "depreciation_rate",
                "must be a fraction between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&business_fraction) {
            return Err(Error::invalid_argument(
                "business_fraction",
                "must be a fraction between 0 and 1",
            ));
        }
        if !years_since_valuation.is_finite() || years_since_valuation < 0.0 {
            return Err(Error::invalid_argument(
                "years_since_valuation",
                "must be finite and non-negative",
            ));
        }
        Ok(Self {
            initial_value,
            depreciation_rate,
            business_fraction,
            years_since_valuation,
        })
    }

    /// Value after `years` of declining-balance depreciation from the last
    /// valuation.
    pub fn value_after(&self, years: f64) -> f64 {
        self.initial_value * (1.0 - self.depreciation_rate).powf(years)
    }

    /// Current value, depreciated over the years since the last valuation.
    pub fn current_value(&self) -> f64 {
        self.value_after(self.years_since_valuation)
    }

    /// Claimable amount for the most recent year: the business-use share of
    /// the value lost between a year ago and now.
    ///
    /// Returns `None` when the vehicle was valued less than one year ago, in
    /// which case no full year of depreciation has accrued.
    pub fn claim_amount(&self) -> Option<f64> {
        if self.years_since_valuation < 1.0 {
            return None;
        }
        let a_year_ago = self.value_after(self.years_since_valuation - 1.0);
        Some(self.business_fraction * (a_year_ago - self.current_value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depreciates_by_declining_balance() {
        let vehicle = Vehicle::new(10_000.0, 0.18, 0.95, 2.0).unwrap();
        assert!((vehicle.current_value() - 6_724.0).abs() < 1e-9);
        assert!((vehicle.value_after(0.0) - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn claim_is_business_share_of_last_years_loss() {
        let vehicle = Vehicle::new(10_000.0, 0.18, 0.95, 2.0).unwrap();
        // value a year ago 8200, now 6724
        let claim = vehicle.claim_amount().unwrap();
        assert!((claim - 0.95 * (8_200.0 - 6_724.0)).abs() < 1e-9);
    }

    #[test]
    fn no_claim_within_first_year() {
        let vehicle = Vehicle::new(10_000.0, 0.18, 0.95, 0.5).unwrap();
        assert_eq!(vehicle.claim_amount(), None);
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        assert!(Vehicle::new(10_000.0, 1.5, 0.95, 1.0).is_err());
        assert!(Vehicle::new(10_000.0, 0.18, -0.1, 1.0).is_err());
        assert!(Vehicle::new(-1.0, 0.18, 0.95, 1.0).is_err());
        assert!(Vehicle::new(10_000.0, 0.18, 0.95, f64::NAN).is_err());
    }
}

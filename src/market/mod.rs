//! Flat market-data providers consumed by the valuation models.
//!
//! Both containers are immutable once built and are shared by reference (`Arc`) across
//! every model that reads them.

use serde::{Deserialize, Serialize};

/// Flat continuously compounded discount curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatYieldCurve {
    rate: f64,
}

impl FlatYieldCurve {
    /// Creates a curve at a flat continuously compounded `rate`.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Returns the flat rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Discount factor `exp(-r t)` for a year fraction `t`.
    #[inline]
    pub fn discount(&self, t: f64) -> f64 {
        (-self.rate * t).exp()
    }
}

/// Spot level and continuous dividend yield of an equity underlying.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityCurve {
    spot: f64,
    dividend_yield: f64,
}

impl EquityCurve {
    pub fn new(spot: f64, dividend_yield: f64) -> Self {
        Self {
            spot,
            dividend_yield,
        }
    }

    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn flat_curve_discounts_continuously() {
        let curve = FlatYieldCurve::new(0.02);
        assert_eq!(curve.discount(0.0), 1.0);
        assert_relative_eq!(curve.discount(1.0), 0.980_198_673_306_755_8, epsilon = 1e-15);
        assert_relative_eq!(
            curve.discount(2.0),
            curve.discount(1.0) * curve.discount(1.0),
            epsilon = 1e-15
        );
    }
}

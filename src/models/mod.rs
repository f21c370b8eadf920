//! Valuation models consumed by the pricing engines.
//!
//! A model aggregates shared curve handles with a single volatility parameter. Models are
//! read-only after construction and are shared by every engine that needs them.

use std::sync::Arc;

use crate::core::PricingError;
use crate::market::{EquityCurve, FlatYieldCurve};

/// Lognormal equity model: discount curve, spot/dividend curve and a flat volatility.
#[derive(Debug, Clone, PartialEq)]
pub struct BlackScholesModel {
    discount_curve: Arc<FlatYieldCurve>,
    equity_curve: Arc<EquityCurve>,
    sigma: f64,
}

impl BlackScholesModel {
    /// Wraps shared curve handles with a volatility.
    pub fn new(
        discount_curve: Arc<FlatYieldCurve>,
        equity_curve: Arc<EquityCurve>,
        sigma: f64,
    ) -> Self {
        Self {
            discount_curve,
            equity_curve,
            sigma,
        }
    }

    /// Starts a validating builder.
    ///
    /// # Examples
    /// ```
    /// use pricer::models::BlackScholesModel;
    ///
    /// let model = BlackScholesModel::builder()
    ///     .spot(100.0)
    ///     .rate(0.02)
    ///     .vol(0.20)
    ///     .build()
    ///     .unwrap();
    /// assert!((model.forward(1.0) - 100.0 * 0.02_f64.exp()).abs() < 1e-12);
    /// ```
    pub fn builder() -> BlackScholesModelBuilder {
        BlackScholesModelBuilder::default()
    }

    #[inline]
    pub fn spot(&self) -> f64 {
        self.equity_curve.spot()
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.discount_curve.rate()
    }

    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.equity_curve.dividend_yield()
    }

    #[inline]
    pub fn discount(&self, t: f64) -> f64 {
        self.discount_curve.discount(t)
    }

    /// Forward level `S0 exp((r - q) t)`.
    #[inline]
    pub fn forward(&self, t: f64) -> f64 {
        self.spot() * ((self.rate() - self.dividend_yield()) * t).exp()
    }

    pub fn discount_curve(&self) -> &Arc<FlatYieldCurve> {
        &self.discount_curve
    }

    pub fn equity_curve(&self) -> &Arc<EquityCurve> {
        &self.equity_curve
    }
}

/// Builder for [`BlackScholesModel`].
#[derive(Debug, Clone, Default)]
pub struct BlackScholesModelBuilder {
    spot: Option<f64>,
    rate: Option<f64>,
    dividend_yield: Option<f64>,
    vol: Option<f64>,
}

impl BlackScholesModelBuilder {
    /// Sets the spot level.
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the flat risk-free rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the continuous dividend yield.
    pub fn dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = Some(dividend_yield);
        self
    }

    /// Sets the flat volatility.
    pub fn vol(mut self, vol: f64) -> Self {
        self.vol = Some(vol);
        self
    }

    /// Validates and builds the model.
    ///
    /// # Errors
    /// [`PricingError::InvalidMarketData`] when spot or volatility is missing, spot is not
    /// strictly positive, or volatility is negative or non-finite. Zero volatility is
    /// accepted and prices deterministically.
    pub fn build(self) -> Result<BlackScholesModel, PricingError> {
        let spot = self
            .spot
            .ok_or_else(|| PricingError::InvalidMarketData("model spot is required".to_string()))?;
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::InvalidMarketData(
                "model spot must be finite and > 0".to_string(),
            ));
        }

        let sigma = self
            .vol
            .ok_or_else(|| PricingError::InvalidMarketData("model vol is required".to_string()))?;
        validate_vol(sigma)?;

        let rate = self.rate.unwrap_or(0.0);
        let dividend_yield = self.dividend_yield.unwrap_or(0.0);

        Ok(BlackScholesModel::new(
            Arc::new(FlatYieldCurve::new(rate)),
            Arc::new(EquityCurve::new(spot, dividend_yield)),
            sigma,
        ))
    }
}

/// Black model for rate products: a discount curve plus one lognormal volatility.
#[derive(Debug, Clone, PartialEq)]
pub struct BlackRateModel {
    discount_curve: Arc<FlatYieldCurve>,
    sigma: f64,
}

impl BlackRateModel {
    pub fn new(discount_curve: Arc<FlatYieldCurve>, sigma: f64) -> Self {
        Self {
            discount_curve,
            sigma,
        }
    }

    /// Builds a model on its own flat curve.
    ///
    /// # Errors
    /// [`PricingError::InvalidMarketData`] for a negative or non-finite volatility.
    pub fn flat(rate: f64, sigma: f64) -> Result<Self, PricingError> {
        validate_vol(sigma)?;
        Ok(Self::new(Arc::new(FlatYieldCurve::new(rate)), sigma))
    }

    #[inline]
    pub fn discount(&self, t: f64) -> f64 {
        self.discount_curve.discount(t)
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.discount_curve.rate()
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn discount_curve(&self) -> &Arc<FlatYieldCurve> {
        &self.discount_curve
    }
}

fn validate_vol(sigma: f64) -> Result<(), PricingError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(PricingError::InvalidMarketData(
            "model vol must be finite and >= 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn forward_carries_rate_minus_dividend() {
        let model = BlackScholesModel::builder()
            .spot(100.0)
            .rate(0.05)
            .dividend_yield(0.02)
            .vol(0.2)
            .build()
            .unwrap();

        assert_relative_eq!(model.forward(2.0), 100.0 * (0.06_f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(model.discount(2.0), (-0.1_f64).exp(), epsilon = 1e-15);
        assert_eq!(model.forward(0.0), 100.0);
    }

    #[test]
    fn builder_rejects_bad_inputs() {
        assert!(matches!(
            BlackScholesModel::builder().rate(0.01).vol(0.2).build(),
            Err(PricingError::InvalidMarketData(_))
        ));
        assert!(BlackScholesModel::builder().spot(-1.0).vol(0.2).build().is_err());
        assert!(BlackScholesModel::builder().spot(100.0).vol(-0.1).build().is_err());
        assert!(BlackScholesModel::builder().spot(100.0).vol(0.0).build().is_ok());
        assert!(BlackRateModel::flat(0.02, f64::NAN).is_err());
    }

    #[test]
    fn models_share_one_curve() {
        let curve = Arc::new(FlatYieldCurve::new(0.02));
        let equity = BlackScholesModel::new(
            Arc::clone(&curve),
            Arc::new(EquityCurve::new(100.0, 0.0)),
            0.2,
        );
        let rates = BlackRateModel::new(Arc::clone(&curve), 0.25);

        assert!(Arc::ptr_eq(equity.discount_curve(), rates.discount_curve()));
        assert_eq!(equity.discount(3.0), rates.discount(3.0));
        assert_eq!(Arc::strong_count(&curve), 3);
    }
}

use std::sync::Arc;

use crate::core::{InstrumentKind, PricingEngine, PricingError};
use crate::instruments::Instrument;
use crate::models::BlackScholesModel;
use crate::pricing::Payoff;

use super::black76::black_forward;

/// Analytic Black-Scholes engine for European options with a plain-vanilla payoff.
///
/// The option is priced as a Black-76 option on the model forward, discounted once from
/// maturity.
#[derive(Debug, Clone)]
pub struct BlackScholesEngine {
    model: Arc<BlackScholesModel>,
}

impl BlackScholesEngine {
    pub fn new(model: Arc<BlackScholesModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &Arc<BlackScholesModel> {
        &self.model
    }
}

impl PricingEngine for BlackScholesEngine {
    fn name(&self) -> &'static str {
        "BlackScholesEngine"
    }

    fn target_kind(&self) -> InstrumentKind {
        InstrumentKind::European
    }

    fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        let option = instrument
            .product()
            .as_european()
            .ok_or_else(|| self.type_mismatch(instrument))?;

        let maturity = option.maturity();
        let payoff = option.payoff();

        // Value at expiry, undiscounted.
        if maturity <= 0.0 {
            return Ok(payoff.value(self.model.spot()));
        }

        let df = self.model.discount(maturity);
        let forward = self.model.forward(maturity);
        let std_dev = self.model.sigma() * maturity.sqrt();
        if std_dev <= 0.0 {
            return Ok(df * payoff.value(forward));
        }

        let Payoff::PlainVanilla {
            option_type,
            strike,
        } = *payoff
        else {
            return Err(PricingError::TypeMismatch {
                engine: self.name(),
                expected: "plain vanilla payoff",
                found: payoff.form(),
            });
        };

        let price = df * black_forward(forward, strike, std_dev, option_type);
        tracing::trace!(engine = self.name(), maturity, strike, price, "closed-form price");
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::OptionType;
    use crate::instruments::{EuropeanOption, Instrument};

    fn model(vol: f64) -> Arc<BlackScholesModel> {
        Arc::new(
            BlackScholesModel::builder()
                .spot(100.0)
                .rate(0.02)
                .vol(vol)
                .build()
                .unwrap(),
        )
    }

    fn price(option: EuropeanOption, vol: f64) -> Result<f64, PricingError> {
        BlackScholesEngine::new(model(vol)).evaluate(&Instrument::new(option))
    }

    #[test]
    fn atm_call_reference_value() {
        let call = price(EuropeanOption::call(100.0, 1.0), 0.2).unwrap();
        assert_relative_eq!(call, 8.916_037_278_572_539, epsilon = 1e-9);
    }

    #[test]
    fn put_call_parity_with_dividends() {
        let model = Arc::new(
            BlackScholesModel::builder()
                .spot(100.0)
                .rate(0.05)
                .dividend_yield(0.03)
                .vol(0.25)
                .build()
                .unwrap(),
        );
        let engine = BlackScholesEngine::new(Arc::clone(&model));
        let call = engine
            .evaluate(&Instrument::new(EuropeanOption::call(110.0, 2.0)))
            .unwrap();
        let put = engine
            .evaluate(&Instrument::new(EuropeanOption::put(110.0, 2.0)))
            .unwrap();

        let parity = model.discount(2.0) * (model.forward(2.0) - 110.0);
        assert_relative_eq!(call - put, parity, epsilon = 1e-10);
    }

    #[test]
    fn expired_option_pays_intrinsic_on_spot() {
        assert_eq!(price(EuropeanOption::put(110.0, 0.0), 0.2), Ok(10.0));
        assert_eq!(price(EuropeanOption::call(90.0, -0.5), 0.2), Ok(10.0));
    }

    #[test]
    fn zero_vol_discounts_forward_intrinsic() {
        let call = price(EuropeanOption::call(95.0, 1.0), 0.0).unwrap();
        let df = (-0.02_f64).exp();
        assert_eq!(call, df * (100.0 * 0.02_f64.exp() - 95.0));
    }

    #[test]
    fn digital_payoff_is_rejected_once_vol_is_positive() {
        let option = EuropeanOption::new(Payoff::digital(OptionType::Call, 100.0, 5.0), 1.0);
        assert_eq!(
            price(option.clone(), 0.2),
            Err(PricingError::TypeMismatch {
                engine: "BlackScholesEngine",
                expected: "plain vanilla payoff",
                found: "digital payoff",
            })
        );
        // The volatility-free branch evaluates any payoff form.
        assert!(price(option, 0.0).unwrap() > 0.0);
    }
}

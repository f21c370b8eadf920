use std::sync::Arc;

use crate::core::{InstrumentKind, PricingEngine, PricingError};
use crate::instruments::Instrument;
use crate::models::BlackScholesModel;
use crate::pricing::Payoff;

use super::black76::black_digital_forward;

/// Analytic engine for cash-or-nothing digital options.
#[derive(Debug, Clone)]
pub struct DigitalBlackScholesEngine {
    model: Arc<BlackScholesModel>,
}

impl DigitalBlackScholesEngine {
    pub fn new(model: Arc<BlackScholesModel>) -> Self {
        Self { model }
    }
}

impl PricingEngine for DigitalBlackScholesEngine {
    fn name(&self) -> &'static str {
        "DigitalBlackScholesEngine"
    }

    fn target_kind(&self) -> InstrumentKind {
        InstrumentKind::Digital
    }

    fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        let option = instrument
            .product()
            .as_digital()
            .ok_or_else(|| self.type_mismatch(instrument))?;

        let maturity = option.maturity();
        let payoff = option.payoff();
        if maturity <= 0.0 {
            return Ok(payoff.value(self.model.spot()));
        }

        let df = self.model.discount(maturity);
        let forward = self.model.forward(maturity);
        let std_dev = self.model.sigma() * maturity.sqrt();
        if std_dev <= 0.0 {
            return Ok(df * payoff.value(forward));
        }

        let Payoff::Digital {
            option_type,
            strike,
            payout,
        } = *payoff
        else {
            return Err(PricingError::TypeMismatch {
                engine: self.name(),
                expected: "digital payoff",
                found: payoff.form(),
            });
        };

        let price = df * black_digital_forward(forward, strike, std_dev, option_type, payout);
        tracing::trace!(
            engine = self.name(),
            maturity,
            strike,
            payout,
            price,
            "closed-form price"
        );
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::OptionType;
    use crate::instruments::{DigitalOption, EuropeanOption};
    use crate::math::normal_cdf;

    fn engine(vol: f64) -> DigitalBlackScholesEngine {
        DigitalBlackScholesEngine::new(Arc::new(
            BlackScholesModel::builder()
                .spot(100.0)
                .rate(0.02)
                .vol(vol)
                .build()
                .unwrap(),
        ))
    }

    #[test]
    fn digital_call_is_discounted_probability_times_payout() {
        let option = DigitalOption::cash_or_nothing(OptionType::Call, 100.0, 1.0, 10.0);
        let price = engine(0.2).evaluate(&Instrument::new(option)).unwrap();
        // d2 = ln(F/K)/0.2 - 0.1 = 0.1 - 0.1 = 0.
        assert_relative_eq!(price, 10.0 * (-0.02_f64).exp() * normal_cdf(0.0), epsilon = 1e-12);
    }

    #[test]
    fn rejects_european_instrument() {
        let err = engine(0.2)
            .evaluate(&Instrument::new(EuropeanOption::call(100.0, 1.0)))
            .unwrap_err();
        assert!(matches!(err, PricingError::TypeMismatch { found: "european", .. }));
    }

    #[test]
    fn expired_digital_uses_strict_moneyness_on_spot() {
        let atm = DigitalOption::cash_or_nothing(OptionType::Call, 100.0, 0.0, 10.0);
        assert_eq!(engine(0.2).evaluate(&Instrument::new(atm)), Ok(0.0));

        let itm = DigitalOption::cash_or_nothing(OptionType::Put, 101.0, 0.0, 10.0);
        assert_eq!(engine(0.2).evaluate(&Instrument::new(itm)), Ok(10.0));
    }
}

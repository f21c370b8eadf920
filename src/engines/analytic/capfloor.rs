//! Black engines for caplets, caps and floors.
//!
//! Every optionlet is priced the same way, whichever container it sits in:
//! `notional * year_fraction * df(end) * black(F, K, sigma * sqrt(start))`.

use std::sync::Arc;

use crate::core::{InstrumentKind, PricingEngine, PricingError};
use crate::instruments::Instrument;
use crate::models::BlackRateModel;
use crate::rates::Caplet;

use super::black76::black_forward;

fn optionlet_price(model: &BlackRateModel, caplet: &Caplet) -> f64 {
    let std_dev = model.sigma() * caplet.start().max(0.0).sqrt();
    let df = model.discount(caplet.end());
    caplet.notional()
        * caplet.year_fraction()
        * df
        * black_forward(
            caplet.forward_rate(),
            caplet.strike(),
            std_dev,
            caplet.option_type(),
        )
}

fn strip_price(model: &BlackRateModel, optionlets: &[Caplet]) -> f64 {
    optionlets
        .iter()
        .map(|caplet| optionlet_price(model, caplet))
        .sum()
}

/// Black engine for a single caplet or floorlet.
#[derive(Debug, Clone)]
pub struct CapletBlackEngine {
    model: Arc<BlackRateModel>,
}

impl CapletBlackEngine {
    pub fn new(model: Arc<BlackRateModel>) -> Self {
        Self { model }
    }
}

impl PricingEngine for CapletBlackEngine {
    fn name(&self) -> &'static str {
        "CapletBlackEngine"
    }

    fn target_kind(&self) -> InstrumentKind {
        InstrumentKind::Caplet
    }

    fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        let caplet = instrument
            .product()
            .as_caplet()
            .ok_or_else(|| self.type_mismatch(instrument))?;
        let price = optionlet_price(&self.model, caplet);
        let start = caplet.start();
        tracing::trace!(engine = self.name(), start, price, "closed-form price");
        Ok(price)
    }
}

/// Black engine for caps: sum of independently priced caplets.
#[derive(Debug, Clone)]
pub struct CapBlackEngine {
    model: Arc<BlackRateModel>,
}

impl CapBlackEngine {
    pub fn new(model: Arc<BlackRateModel>) -> Self {
        Self { model }
    }
}

impl PricingEngine for CapBlackEngine {
    fn name(&self) -> &'static str {
        "CapBlackEngine"
    }

    fn target_kind(&self) -> InstrumentKind {
        InstrumentKind::Cap
    }

    fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        let cap = instrument
            .product()
            .as_cap()
            .ok_or_else(|| self.type_mismatch(instrument))?;
        let price = strip_price(&self.model, cap.caplets());
        let periods = cap.caplets().len();
        tracing::trace!(engine = self.name(), periods, price, "closed-form price");
        Ok(price)
    }
}

/// Black engine for floors: sum of independently priced floorlets.
#[derive(Debug, Clone)]
pub struct FloorBlackEngine {
    model: Arc<BlackRateModel>,
}

impl FloorBlackEngine {
    pub fn new(model: Arc<BlackRateModel>) -> Self {
        Self { model }
    }
}

impl PricingEngine for FloorBlackEngine {
    fn name(&self) -> &'static str {
        "FloorBlackEngine"
    }

    fn target_kind(&self) -> InstrumentKind {
        InstrumentKind::Floor
    }

    fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        let floor = instrument
            .product()
            .as_floor()
            .ok_or_else(|| self.type_mismatch(instrument))?;
        let price = strip_price(&self.model, floor.floorlets());
        let periods = floor.floorlets().len();
        tracing::trace!(engine = self.name(), periods, price, "closed-form price");
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::rates::{Cap, Floor};

    fn model() -> Arc<BlackRateModel> {
        Arc::new(BlackRateModel::flat(0.02, 0.25).unwrap())
    }

    #[test]
    fn caplet_uses_start_for_vol_and_end_for_discount() {
        let caplet = Caplet::new(1.0e6, 0.03, 0.028, 0.5, 1.0, 0.5);
        let price = CapletBlackEngine::new(model())
            .evaluate(&Instrument::new(caplet))
            .unwrap();

        let expected = 1.0e6
            * 0.5
            * (-0.02_f64).exp()
            * black_forward(0.028, 0.03, 0.25 * 0.5_f64.sqrt(), caplet.option_type());
        assert_relative_eq!(price, expected, epsilon = 1e-9);
    }

    #[test]
    fn cap_is_sum_of_caplets() {
        let starts = [0.5, 1.5, 2.5, 3.5];
        let ends = [1.5, 2.5, 3.5, 4.5];
        let accruals = [1.0; 4];
        let cap = Cap::from_schedule(1.0e6, 0.03, 0.028, &starts, &ends, &accruals).unwrap();

        let caplet_engine = CapletBlackEngine::new(model());
        let summed: f64 = cap
            .caplets()
            .iter()
            .map(|caplet| caplet_engine.evaluate(&Instrument::new(*caplet)).unwrap())
            .sum();

        let price = CapBlackEngine::new(model())
            .evaluate(&Instrument::new(cap))
            .unwrap();
        assert_relative_eq!(price, summed, epsilon = 1e-9);
    }

    #[test]
    fn cap_minus_floor_is_discounted_forward_minus_strike() {
        let starts = [1.0, 2.0];
        let ends = [2.0, 3.0];
        let accruals = [1.0, 1.0];
        let cap = Cap::from_schedule(100.0, 0.03, 0.035, &starts, &ends, &accruals).unwrap();
        let floor = Floor::from_schedule(100.0, 0.03, 0.035, &starts, &ends, &accruals).unwrap();

        let cap_price = CapBlackEngine::new(model()).evaluate(&Instrument::new(cap)).unwrap();
        let floor_price = FloorBlackEngine::new(model())
            .evaluate(&Instrument::new(floor))
            .unwrap();

        let annuity = (-0.04_f64).exp() + (-0.06_f64).exp();
        assert_relative_eq!(cap_price - floor_price, 100.0 * 0.005 * annuity, epsilon = 1e-10);
    }

    #[test]
    fn cap_engine_rejects_floor() {
        let floor = Floor::new(vec![Caplet::floorlet(1.0, 0.03, 0.03, 1.0, 2.0, 1.0)]);
        let err = CapBlackEngine::new(model())
            .evaluate(&Instrument::new(floor))
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::TypeMismatch {
                engine: "CapBlackEngine",
                expected: "cap",
                found: "floor",
            }
        );
    }
}

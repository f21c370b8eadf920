//! Swap and swaption engines on a flat-curve Black rate model.
//!
//! Both treat the floating leg as one constant forward rate across every period, so the
//! swap value reduces to `sign * notional * annuity * (F - K)`.

use std::sync::Arc;

use crate::core::{InstrumentKind, OptionType, PricingEngine, PricingError};
use crate::instruments::Instrument;
use crate::models::BlackRateModel;
use crate::rates::InterestRateSwap;

use super::black76::black_forward;

/// Swap present value and its annuity.
fn swap_value(
    model: &BlackRateModel,
    swap: &InterestRateSwap,
) -> Result<(f64, f64), PricingError> {
    let annuity = swap.annuity(|t| model.discount(t))?;
    let spread = swap.forward_rate() - swap.fixed_rate();
    let value = swap.sign() * swap.notional() * annuity * spread;
    Ok((value, annuity))
}

/// Discounted-cashflow engine for fixed-for-floating swaps.
#[derive(Debug, Clone)]
pub struct SwapEngine {
    model: Arc<BlackRateModel>,
}

impl SwapEngine {
    pub fn new(model: Arc<BlackRateModel>) -> Self {
        Self { model }
    }
}

impl PricingEngine for SwapEngine {
    fn name(&self) -> &'static str {
        "SwapEngine"
    }

    fn target_kind(&self) -> InstrumentKind {
        InstrumentKind::Swap
    }

    fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        let swap = instrument
            .product()
            .as_swap()
            .ok_or_else(|| self.type_mismatch(instrument))?;
        let (price, annuity) = swap_value(&self.model, swap)?;
        tracing::trace!(engine = self.name(), annuity, price, "closed-form price");
        Ok(price)
    }
}

/// Black engine for European swaptions.
///
/// A payer swaption is a call on the forward rate, a receiver swaption a put; both are
/// scaled by notional and annuity. At or after exercise the value is the swap's positive
/// part.
#[derive(Debug, Clone)]
pub struct SwaptionBlackEngine {
    model: Arc<BlackRateModel>,
}

impl SwaptionBlackEngine {
    pub fn new(model: Arc<BlackRateModel>) -> Self {
        Self { model }
    }
}

impl PricingEngine for SwaptionBlackEngine {
    fn name(&self) -> &'static str {
        "SwaptionBlackEngine"
    }

    fn target_kind(&self) -> InstrumentKind {
        InstrumentKind::Swaption
    }

    fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        let swaption = instrument
            .product()
            .as_swaption()
            .ok_or_else(|| self.type_mismatch(instrument))?;
        let swap = swaption.underlying();
        let (swap_pv, annuity) = swap_value(&self.model, swap)?;

        let exercise = swaption.exercise_time();
        if exercise <= 0.0 {
            return Ok(swap_pv.max(0.0));
        }

        let option_type = if swap.is_payer() {
            OptionType::Call
        } else {
            OptionType::Put
        };
        let std_dev = self.model.sigma() * exercise.sqrt();
        let price = swap.notional()
            * annuity
            * black_forward(swap.forward_rate(), swap.fixed_rate(), std_dev, option_type);
        tracing::trace!(engine = self.name(), exercise, annuity, price, "closed-form price");
        Ok(price)
    }
}

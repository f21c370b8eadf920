//! Instrument definition for single-barrier contracts.
//!
//! The barrier is monitored on the pricing engine's time grid. A level at or beyond the
//! barrier counts as a hit (`>=` for up barriers, `<=` for down barriers) and the hit is
//! latched for the rest of the path.

use serde::{Deserialize, Serialize};

use crate::core::{BarrierDirection, BarrierStyle, OptionType};
use crate::pricing::Payoff;

/// Single-barrier knock-in / knock-out option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierOption {
    payoff: Payoff,
    maturity: f64,
    barrier: f64,
    direction: BarrierDirection,
    style: BarrierStyle,
}

impl BarrierOption {
    pub fn new(
        payoff: Payoff,
        maturity: f64,
        barrier: f64,
        direction: BarrierDirection,
        style: BarrierStyle,
    ) -> Self {
        Self {
            payoff,
            maturity,
            barrier,
            direction,
            style,
        }
    }

    /// Up-and-out option with a plain-vanilla payoff.
    pub fn up_and_out(option_type: OptionType, strike: f64, maturity: f64, barrier: f64) -> Self {
        Self::vanilla(option_type, strike, maturity, barrier, BarrierDirection::Up, BarrierStyle::Out)
    }

    /// Up-and-in option with a plain-vanilla payoff.
    pub fn up_and_in(option_type: OptionType, strike: f64, maturity: f64, barrier: f64) -> Self {
        Self::vanilla(option_type, strike, maturity, barrier, BarrierDirection::Up, BarrierStyle::In)
    }

    /// Down-and-out option with a plain-vanilla payoff.
    pub fn down_and_out(option_type: OptionType, strike: f64, maturity: f64, barrier: f64) -> Self {
        Self::vanilla(option_type, strike, maturity, barrier, BarrierDirection::Down, BarrierStyle::Out)
    }

    /// Down-and-in option with a plain-vanilla payoff.
    pub fn down_and_in(option_type: OptionType, strike: f64, maturity: f64, barrier: f64) -> Self {
        Self::vanilla(option_type, strike, maturity, barrier, BarrierDirection::Down, BarrierStyle::In)
    }

    fn vanilla(
        option_type: OptionType,
        strike: f64,
        maturity: f64,
        barrier: f64,
        direction: BarrierDirection,
        style: BarrierStyle,
    ) -> Self {
        Self::new(
            Payoff::plain_vanilla(option_type, strike),
            maturity,
            barrier,
            direction,
            style,
        )
    }

    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Barrier level in spot units.
    pub fn barrier(&self) -> f64 {
        self.barrier
    }

    pub fn direction(&self) -> BarrierDirection {
        self.direction
    }

    pub fn style(&self) -> BarrierStyle {
        self.style
    }
}

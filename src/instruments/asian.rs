//! Arithmetic-average Asian option contract.
//!
//! The average is taken over the simulated levels after each time step of the pricing
//! engine, so the observation schedule is the engine's grid rather than a contract
//! field. The payoff is applied to that average instead of the terminal spot.
//! This module intentionally does not price; see [`crate::engines::monte_carlo`].

use serde::{Deserialize, Serialize};

use crate::core::OptionType;
use crate::pricing::Payoff;

/// Asian option instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsianOption {
    payoff: Payoff,
    maturity: f64,
}

impl AsianOption {
    /// Builds an Asian option paying `payoff(average)` at `maturity`.
    pub fn new(payoff: Payoff, maturity: f64) -> Self {
        Self { payoff, maturity }
    }

    /// Fixed-strike arithmetic-average option with a plain-vanilla payoff.
    pub fn arithmetic(option_type: OptionType, strike: f64, maturity: f64) -> Self {
        Self::new(Payoff::plain_vanilla(option_type, strike), maturity)
    }

    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    pub fn maturity(&self) -> f64 {
        self.maturity
    }
}

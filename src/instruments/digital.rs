use serde::{Deserialize, Serialize};

use crate::core::OptionType;
use crate::pricing::Payoff;

/// Cash-or-nothing digital option settled on the terminal spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalOption {
    payoff: Payoff,
    maturity: f64,
}

impl DigitalOption {
    /// Creates a digital option from an explicit payoff.
    pub fn new(payoff: Payoff, maturity: f64) -> Self {
        Self { payoff, maturity }
    }

    /// Pays `payout` at `maturity` when the spot finishes strictly beyond `strike`.
    pub fn cash_or_nothing(option_type: OptionType, strike: f64, maturity: f64, payout: f64) -> Self {
        Self::new(Payoff::digital(option_type, strike, payout), maturity)
    }

    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    /// Time to maturity in years.
    pub fn maturity(&self) -> f64 {
        self.maturity
    }
}

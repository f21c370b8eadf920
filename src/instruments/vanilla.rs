//! European option contract: one payoff settled on the terminal spot.
//!
//! [`EuropeanOption`] is the default input for the Black-Scholes engine. Its payoff is
//! normally plain vanilla; the engine rejects other payoff forms once volatility is
//! positive, because the closed form needs a strike.

use serde::{Deserialize, Serialize};

use crate::core::OptionType;
use crate::pricing::Payoff;

/// European option contract.
///
/// # Examples
/// ```
/// use pricer::core::OptionType;
/// use pricer::instruments::EuropeanOption;
///
/// let call = EuropeanOption::call(100.0, 1.0);
/// assert_eq!(call.payoff().option_type(), OptionType::Call);
/// assert_eq!(call.maturity(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EuropeanOption {
    payoff: Payoff,
    maturity: f64,
}

impl EuropeanOption {
    /// Creates an option settling `payoff` at `maturity` (year fraction).
    pub fn new(payoff: Payoff, maturity: f64) -> Self {
        Self { payoff, maturity }
    }

    /// Plain-vanilla European call.
    pub fn call(strike: f64, maturity: f64) -> Self {
        Self::new(Payoff::plain_vanilla(OptionType::Call, strike), maturity)
    }

    /// Plain-vanilla European put.
    pub fn put(strike: f64, maturity: f64) -> Self {
        Self::new(Payoff::plain_vanilla(OptionType::Put, strike), maturity)
    }

    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    /// Time to maturity in years.
    pub fn maturity(&self) -> f64 {
        self.maturity
    }
}

//! Module `pricing::payoff`.
//!
//! A payoff maps one underlying level (terminal spot, or a path average) to a cash amount.
//! Two forms exist: plain vanilla intrinsic value and cash-or-nothing digital. Payoffs are
//! immutable values; engines that need the strike or payout read them back through the
//! accessors rather than re-deriving them.

use serde::{Deserialize, Serialize};

use crate::core::OptionType;

/// Terminal payoff of an option-style instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Payoff {
    /// `max(S - K, 0)` for calls, `max(K - S, 0)` for puts.
    PlainVanilla { option_type: OptionType, strike: f64 },
    /// `payout` when strictly in the money (`S > K` call, `S < K` put), else zero.
    Digital {
        option_type: OptionType,
        strike: f64,
        payout: f64,
    },
}

impl Payoff {
    pub fn plain_vanilla(option_type: OptionType, strike: f64) -> Self {
        Self::PlainVanilla {
            option_type,
            strike,
        }
    }

    pub fn digital(option_type: OptionType, strike: f64, payout: f64) -> Self {
        Self::Digital {
            option_type,
            strike,
            payout,
        }
    }

    /// Cash amount paid for underlying level `level`.
    ///
    /// # Examples
    /// ```
    /// use pricer::core::OptionType;
    /// use pricer::pricing::Payoff;
    ///
    /// let call = Payoff::plain_vanilla(OptionType::Call, 100.0);
    /// assert_eq!(call.value(120.0), 20.0);
    ///
    /// let digital = Payoff::digital(OptionType::Call, 100.0, 10.0);
    /// assert_eq!(digital.value(100.0), 0.0);
    /// ```
    #[inline]
    pub fn value(&self, level: f64) -> f64 {
        match *self {
            Self::PlainVanilla {
                option_type,
                strike,
            } => intrinsic(option_type, level, strike),
            Self::Digital {
                option_type,
                strike,
                payout,
            } => {
                if is_strictly_in_the_money(option_type, level, strike) {
                    payout
                } else {
                    0.0
                }
            }
        }
    }

    pub fn option_type(&self) -> OptionType {
        match *self {
            Self::PlainVanilla { option_type, .. } | Self::Digital { option_type, .. } => {
                option_type
            }
        }
    }

    pub fn strike(&self) -> f64 {
        match *self {
            Self::PlainVanilla { strike, .. } | Self::Digital { strike, .. } => strike,
        }
    }

    /// Short form name used in diagnostics.
    pub fn form(&self) -> &'static str {
        match self {
            Self::PlainVanilla { .. } => "plain vanilla payoff",
            Self::Digital { .. } => "digital payoff",
        }
    }
}

/// Deterministic call/put intrinsic value of `level` against `strike`.
#[inline]
pub(crate) fn intrinsic(option_type: OptionType, level: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (level - strike).max(0.0),
        OptionType::Put => (strike - level).max(0.0),
    }
}

/// Strict moneyness: the money boundary itself is out of the money.
#[inline]
pub(crate) fn is_strictly_in_the_money(option_type: OptionType, level: f64, strike: f64) -> bool {
    match option_type {
        OptionType::Call => level > strike,
        OptionType::Put => level < strike,
    }
}

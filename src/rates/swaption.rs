use serde::{Deserialize, Serialize};

use super::InterestRateSwap;

/// European option to enter `underlying` at `exercise_time`.
///
/// Payer/receiver side, strike, forward and schedule all come from the underlying swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swaption {
    underlying: InterestRateSwap,
    exercise_time: f64,
}

impl Swaption {
    pub fn new(underlying: InterestRateSwap, exercise_time: f64) -> Self {
        Self {
            underlying,
            exercise_time,
        }
    }

    pub fn underlying(&self) -> &InterestRateSwap {
        &self.underlying
    }

    pub fn exercise_time(&self) -> f64 {
        self.exercise_time
    }
}

//! Caplets, floorlets, and the caps and floors built from them.
//!
//! Each optionlet carries its own forward rate and accrual period. Volatility accrues to
//! the period *start* and the payment is discounted from the period *end*.

use serde::{Deserialize, Serialize};

use crate::core::{OptionType, PricingError};

/// Single caplet (call on the rate) or floorlet (put on the rate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Caplet {
    notional: f64,
    strike: f64,
    forward_rate: f64,
    start: f64,
    end: f64,
    year_fraction: f64,
    option_type: OptionType,
}

impl Caplet {
    /// Caplet paying `notional * year_fraction * max(F - K, 0)` at `end`.
    pub fn new(
        notional: f64,
        strike: f64,
        forward_rate: f64,
        start: f64,
        end: f64,
        year_fraction: f64,
    ) -> Self {
        Self {
            notional,
            strike,
            forward_rate,
            start,
            end,
            year_fraction,
            option_type: OptionType::Call,
        }
    }

    /// Floorlet paying `notional * year_fraction * max(K - F, 0)` at `end`.
    pub fn floorlet(
        notional: f64,
        strike: f64,
        forward_rate: f64,
        start: f64,
        end: f64,
        year_fraction: f64,
    ) -> Self {
        Self {
            option_type: OptionType::Put,
            ..Self::new(notional, strike, forward_rate, start, end, year_fraction)
        }
    }

    pub fn notional(&self) -> f64 {
        self.notional
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn forward_rate(&self) -> f64 {
        self.forward_rate
    }

    /// Accrual start; the option expiry.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Accrual end; the payment time.
    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn year_fraction(&self) -> f64 {
        self.year_fraction
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn is_floorlet(&self) -> bool {
        self.option_type == OptionType::Put
    }
}

/// Strip of caplets priced independently and summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cap {
    caplets: Vec<Caplet>,
}

impl Cap {
    pub fn new(caplets: Vec<Caplet>) -> Self {
        Self { caplets }
    }

    /// Builds one caplet per period from parallel schedule vectors.
    ///
    /// # Errors
    /// [`PricingError::InconsistentSchedule`] when `starts`, `ends` and `accruals`
    /// differ in length.
    ///
    /// # Examples
    /// ```
    /// use pricer::rates::Cap;
    ///
    /// let cap = Cap::from_schedule(
    ///     1_000_000.0,
    ///     0.03,
    ///     0.028,
    ///     &[0.5, 1.5, 2.5, 3.5],
    ///     &[1.5, 2.5, 3.5, 4.5],
    ///     &[1.0, 1.0, 1.0, 1.0],
    /// )
    /// .unwrap();
    /// assert_eq!(cap.caplets().len(), 4);
    /// ```
    pub fn from_schedule(
        notional: f64,
        strike: f64,
        forward_rate: f64,
        starts: &[f64],
        ends: &[f64],
        accruals: &[f64],
    ) -> Result<Self, PricingError> {
        let caplets = optionlets(starts, ends, accruals, |start, end, accrual| {
            Caplet::new(notional, strike, forward_rate, start, end, accrual)
        })?;
        Ok(Self::new(caplets))
    }

    pub fn caplets(&self) -> &[Caplet] {
        &self.caplets
    }
}

/// Strip of floorlets priced independently and summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    floorlets: Vec<Caplet>,
}

impl Floor {
    pub fn new(floorlets: Vec<Caplet>) -> Self {
        Self { floorlets }
    }

    /// Builds one floorlet per period from parallel schedule vectors.
    ///
    /// # Errors
    /// [`PricingError::InconsistentSchedule`] on mismatched vector lengths.
    pub fn from_schedule(
        notional: f64,
        strike: f64,
        forward_rate: f64,
        starts: &[f64],
        ends: &[f64],
        accruals: &[f64],
    ) -> Result<Self, PricingError> {
        let floorlets = optionlets(starts, ends, accruals, |start, end, accrual| {
            Caplet::floorlet(notional, strike, forward_rate, start, end, accrual)
        })?;
        Ok(Self::new(floorlets))
    }

    pub fn floorlets(&self) -> &[Caplet] {
        &self.floorlets
    }
}

fn optionlets(
    starts: &[f64],
    ends: &[f64],
    accruals: &[f64],
    make: impl Fn(f64, f64, f64) -> Caplet,
) -> Result<Vec<Caplet>, PricingError> {
    if starts.len() != ends.len() || starts.len() != accruals.len() {
        return Err(PricingError::InconsistentSchedule(format!(
            "{} starts, {} ends, {} accruals",
            starts.len(),
            ends.len(),
            accruals.len()
        )));
    }

    Ok(starts
        .iter()
        .zip(ends)
        .zip(accruals)
        .map(|((&start, &end), &accrual)| make(start, end, accrual))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floorlet_is_a_put_on_the_rate() {
        let floorlet = Caplet::floorlet(1.0e6, 0.03, 0.028, 0.5, 1.0, 0.5);
        assert!(floorlet.is_floorlet());
        assert_eq!(floorlet.option_type(), OptionType::Put);
        assert_eq!(floorlet.end(), 1.0);
        assert!(!Caplet::new(1.0e6, 0.03, 0.028, 0.5, 1.0, 0.5).is_floorlet());
    }

    #[test]
    fn schedule_vectors_must_line_up() {
        let err = Floor::from_schedule(1.0e6, 0.03, 0.028, &[0.5, 1.5], &[1.5], &[1.0, 1.0])
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::InconsistentSchedule("2 starts, 1 ends, 2 accruals".to_string())
        );

        let floor =
            Floor::from_schedule(1.0e6, 0.03, 0.028, &[0.5, 1.5], &[1.5, 2.5], &[1.0, 1.0])
                .unwrap();
        assert!(floor.floorlets().iter().all(Caplet::is_floorlet));
        assert_eq!(floor.floorlets()[1].start(), 1.5);
    }
}

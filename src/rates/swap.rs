use serde::{Deserialize, Serialize};

use crate::core::PricingError;

/// Fixed-for-floating swap with one constant forward rate for every floating period.
///
/// The floating leg is not projected per period: each period accrues `forward_rate`.
/// Payment times and accrual factors are parallel vectors and are checked when priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRateSwap {
    notional: f64,
    fixed_rate: f64,
    forward_rate: f64,
    payment_times: Vec<f64>,
    accruals: Vec<f64>,
    payer: bool,
}

impl InterestRateSwap {
    /// Creates a swap; `payer = true` pays fixed and receives floating.
    pub fn new(
        notional: f64,
        fixed_rate: f64,
        forward_rate: f64,
        payment_times: Vec<f64>,
        accruals: Vec<f64>,
        payer: bool,
    ) -> Self {
        Self {
            notional,
            fixed_rate,
            forward_rate,
            payment_times,
            accruals,
            payer,
        }
    }

    pub fn notional(&self) -> f64 {
        self.notional
    }

    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    pub fn forward_rate(&self) -> f64 {
        self.forward_rate
    }

    pub fn payment_times(&self) -> &[f64] {
        &self.payment_times
    }

    pub fn accruals(&self) -> &[f64] {
        &self.accruals
    }

    pub fn is_payer(&self) -> bool {
        self.payer
    }

    /// `+1` for payer, `-1` for receiver.
    pub fn sign(&self) -> f64 {
        if self.payer {
            1.0
        } else {
            -1.0
        }
    }

    /// Annuity `sum(accrual_i * df(t_i))` under the supplied discount function.
    ///
    /// # Errors
    /// [`PricingError::InconsistentSchedule`] when payment times and accruals differ in
    /// length.
    pub fn annuity(&self, discount: impl Fn(f64) -> f64) -> Result<f64, PricingError> {
        if self.payment_times.len() != self.accruals.len() {
            return Err(PricingError::InconsistentSchedule(format!(
                "{} payment times, {} accruals",
                self.payment_times.len(),
                self.accruals.len()
            )));
        }

        Ok(self
            .payment_times
            .iter()
            .zip(&self.accruals)
            .map(|(&t, &accrual)| accrual * discount(t))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn annuity_sums_discounted_accruals() {
        let swap = InterestRateSwap::new(1.0, 0.03, 0.028, vec![1.0, 2.0], vec![1.0, 0.5], true);
        let annuity = swap.annuity(|t| (-0.02 * t).exp()).unwrap();
        assert_relative_eq!(
            annuity,
            (-0.02_f64).exp() + 0.5 * (-0.04_f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn mismatched_schedule_is_rejected() {
        let swap = InterestRateSwap::new(1.0, 0.03, 0.028, vec![1.0, 2.0, 3.0], vec![1.0], false);
        assert!(matches!(
            swap.annuity(|_| 1.0),
            Err(PricingError::InconsistentSchedule(_))
        ));
        assert_eq!(swap.sign(), -1.0);
    }
}

//! Black-76 formulas on a forward, shared by every closed-form engine.
//!
//! Both functions return *undiscounted* values; callers apply their own discount factor.
//! A non-positive `std_dev` selects the volatility-free limit.

use crate::core::OptionType;
use crate::math::normal_cdf;
use crate::pricing::payoff::{intrinsic, is_strictly_in_the_money};

#[inline]
fn d1_d2(forward: f64, strike: f64, std_dev: f64) -> (f64, f64) {
    let d1 = ((forward / strike).ln() + 0.5 * std_dev * std_dev) / std_dev;
    (d1, d1 - std_dev)
}

/// Undiscounted Black-76 call/put on `forward` with total volatility `std_dev = sigma * sqrt(T)`.
///
/// # Examples
/// ```
/// use pricer::core::OptionType;
/// use pricer::engines::analytic::black_forward;
///
/// assert_eq!(black_forward(105.0, 100.0, 0.0, OptionType::Call), 5.0);
/// assert_eq!(black_forward(105.0, 100.0, 0.0, OptionType::Put), 0.0);
/// ```
#[inline]
pub fn black_forward(forward: f64, strike: f64, std_dev: f64, option_type: OptionType) -> f64 {
    if std_dev <= 0.0 {
        return intrinsic(option_type, forward, strike);
    }

    let (d1, d2) = d1_d2(forward, strike, std_dev);
    match option_type {
        OptionType::Call => forward.mul_add(normal_cdf(d1), -strike * normal_cdf(d2)),
        OptionType::Put => strike.mul_add(normal_cdf(-d2), -forward * normal_cdf(-d1)),
    }
}

/// Undiscounted cash-or-nothing digital paying `payout`.
///
/// With `std_dev <= 0` the forward is compared strictly against the strike, so an
/// at-the-money forward pays nothing.
#[inline]
pub fn black_digital_forward(
    forward: f64,
    strike: f64,
    std_dev: f64,
    option_type: OptionType,
    payout: f64,
) -> f64 {
    if std_dev <= 0.0 {
        return if is_strictly_in_the_money(option_type, forward, strike) {
            payout
        } else {
            0.0
        };
    }

    let (_, d2) = d1_d2(forward, strike, std_dev);
    match option_type {
        OptionType::Call => payout * normal_cdf(d2),
        OptionType::Put => payout * normal_cdf(-d2),
    }
}

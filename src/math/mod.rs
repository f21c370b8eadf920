//! Special functions shared by the closed-form engines.

use std::f64::consts::FRAC_1_SQRT_2;

use statrs::function::erf::erfc;

/// Standard normal cumulative distribution.
///
/// Evaluated as `0.5 * erfc(-x / sqrt(2))`, which keeps full relative precision deep in
/// the left tail where `1 - N(-x)` would cancel.
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn cdf_anchor_values() {
        assert_relative_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-15);
        // statrs erfc carries ~1e-11 absolute error near x = 1.
        assert_relative_eq!(normal_cdf(1.0), 0.841_344_746_068_543, epsilon = 1e-10);
        assert_relative_eq!(normal_cdf(-1.96), 0.024_997_895_148_220, epsilon = 1e-10);
    }

    #[test]
    fn cdf_limits() {
        assert_relative_eq!(normal_cdf(10.0), 1.0, epsilon = 1e-12);
        assert!(normal_cdf(-10.0) < 1e-20);
        assert_eq!(normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn left_tail_keeps_relative_precision() {
        // N(-20) ~ 2.7536e-89; a 1 - N(20) formulation returns 0.
        let tail = normal_cdf(-20.0);
        assert!(tail > 0.0);
        assert_relative_eq!(tail, 2.753_624_118_606_233e-89, max_relative = 1e-10);
    }
}

//! Standard normal distribution.

use jd_core::Real;
use statrs::function::erf::erfc;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// Evaluated as `erfc(-x/√2) / 2`, which keeps full relative precision in
/// the lower tail. NaN propagates; `±∞` maps to `1` / `0`.
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normal_pdf_at_zero() {
        let expected = 1.0 / (2.0 * PI).sqrt();
        assert_abs_diff_eq!(normal_pdf(0.0), expected, epsilon = 1e-15);
    }

    #[test]
    fn normal_cdf_reference_values() {
        assert_abs_diff_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(normal_cdf(0.2), 0.579_259_709_439_103, epsilon = 1e-12);
        // statrs' erfc carries about 1e-12 of error here
        assert_abs_diff_eq!(normal_cdf(1.96), 0.975_002_104_851_780, epsilon = 1e-11);
        assert_abs_diff_eq!(normal_cdf(-1.0), 0.158_655_253_931_457, epsilon = 1e-12);
    }

    #[test]
    fn normal_cdf_tails() {
        assert_abs_diff_eq!(normal_cdf(10.0), 1.0, epsilon = 1e-15);
        assert!(normal_cdf(-10.0) < 1e-20);
        assert_eq!(normal_cdf(Real::INFINITY), 1.0);
        assert_eq!(normal_cdf(Real::NEG_INFINITY), 0.0);
    }

    #[test]
    fn normal_cdf_propagates_nan() {
        assert!(normal_cdf(Real::NAN).is_nan());
    }

    #[test]
    fn normal_cdf_symmetry() {
        for x in [0.1, 0.5, 1.3, 2.7] {
            assert_abs_diff_eq!(normal_cdf(x) + normal_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    proptest::proptest! {
        #[test]
        fn normal_cdf_is_a_monotone_probability(x in -30.0f64..30.0, dx in 0.0f64..5.0) {
            let lo = normal_cdf(x);
            let hi = normal_cdf(x + dx);
            proptest::prop_assert!((0.0..=1.0).contains(&lo));
            proptest::prop_assert!(hi >= lo);
        }
    }
}

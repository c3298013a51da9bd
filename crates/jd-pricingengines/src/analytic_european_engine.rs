//! Analytic European option engine (Black-Scholes).
//!
//! Prices European vanilla options with the closed-form Black-Scholes
//! formula on a non-dividend-paying underlying:
//!
//! ```text
//! d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T),   d2 = d1 − σ√T
//! C  = S·N(d1) − K·e^(−rT)·N(d2)
//! P  = K·e^(−rT)·N(−d2) − S·N(−d1)
//! ```
//!
//! The free functions evaluate the formula as written: σ = 0 or T = 0
//! divide by zero and non-positive strikes take the log of a non-positive
//! number, and the resulting NaN or infinity is returned as is.

use jd_core::{ensure, errors::Result, Price, Rate, Real, Time, Volatility};
use jd_instruments::{EuropeanOptionArguments, OptionType, PricingEngine, PricingResults};
use jd_math::distributions::{normal_cdf, normal_pdf};

/// `(d1, d2)` for the given inputs.
#[inline]
pub fn black_scholes_d1_d2(
    spot: Real,
    strike: Real,
    maturity: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
) -> (Real, Real) {
    let std_dev = volatility * maturity.sqrt();
    let d1 = ((spot / strike).ln()
        + (risk_free_rate + 0.5 * volatility * volatility) * maturity)
        / std_dev;
    (d1, d1 - std_dev)
}

/// Black-Scholes price of a European call.
pub fn black_scholes_call(
    spot: Real,
    strike: Real,
    maturity: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
) -> Price {
    let (d1, d2) = black_scholes_d1_d2(spot, strike, maturity, risk_free_rate, volatility);
    spot * normal_cdf(d1) - strike * (-risk_free_rate * maturity).exp() * normal_cdf(d2)
}

/// Black-Scholes price of a European put.
pub fn black_scholes_put(
    spot: Real,
    strike: Real,
    maturity: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
) -> Price {
    let (d1, d2) = black_scholes_d1_d2(spot, strike, maturity, risk_free_rate, volatility);
    strike * (-risk_free_rate * maturity).exp() * normal_cdf(-d2) - spot * normal_cdf(-d1)
}

/// Black-Scholes price for either option type.
pub fn black_scholes_price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    maturity: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
) -> Price {
    match option_type {
        OptionType::Call => black_scholes_call(spot, strike, maturity, risk_free_rate, volatility),
        OptionType::Put => black_scholes_put(spot, strike, maturity, risk_free_rate, volatility),
    }
}

/// Analytic pricing engine for European vanilla options under
/// Black-Scholes dynamics with flat rate and volatility.
///
/// Besides the NPV it reports `delta`, `gamma` and `vega` (per 1.0 absolute
/// vol) as additional results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEuropeanEngine {
    spot: Real,
    risk_free_rate: Rate,
    volatility: Volatility,
}

impl AnalyticEuropeanEngine {
    /// Create a new engine.
    ///
    /// Fails unless `spot > 0` and `volatility > 0`.
    pub fn new(spot: Real, risk_free_rate: Rate, volatility: Volatility) -> Result<Self> {
        ensure!(
            spot.is_finite() && spot > 0.0,
            "spot must be positive, got {spot}"
        );
        ensure!(
            risk_free_rate.is_finite(),
            "risk-free rate must be finite, got {risk_free_rate}"
        );
        ensure!(
            volatility.is_finite() && volatility > 0.0,
            "volatility must be positive, got {volatility}"
        );
        Ok(Self {
            spot,
            risk_free_rate,
            volatility,
        })
    }
}

impl PricingEngine<EuropeanOptionArguments> for AnalyticEuropeanEngine {
    fn calculate(&self, args: &EuropeanOptionArguments) -> Result<PricingResults> {
        let (s, r, sigma) = (self.spot, self.risk_free_rate, self.volatility);
        let k = args.payoff.strike;
        let t = args.maturity;
        let phi = args.payoff.option_type.sign();

        let price = black_scholes_price(args.payoff.option_type, s, k, t, r, sigma);
        let (d1, _) = black_scholes_d1_d2(s, k, t, r, sigma);
        let npd1 = normal_pdf(d1);
        let delta = phi * normal_cdf(phi * d1);
        let gamma = npd1 / (s * sigma * t.sqrt());
        let vega = s * npd1 * t.sqrt();

        tracing::debug!(
            option_type = %args.payoff.option_type,
            strike = k,
            maturity = t,
            price,
            "black-scholes price"
        );

        Ok(PricingResults::from_npv(price)
            .with_result("delta", delta)
            .with_result("gamma", gamma)
            .with_result("vega", vega))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use jd_instruments::EuropeanOption;
    use proptest::prelude::*;

    #[test]
    fn reference_call_and_put() {
        // S=100, K=100, T=1, r=2%, σ=20%: d1 = 0.2, d2 = 0
        let call = black_scholes_call(100.0, 100.0, 1.0, 0.02, 0.2);
        let put = black_scholes_put(100.0, 100.0, 1.0, 0.02, 0.2);
        assert_abs_diff_eq!(call, 8.9160, epsilon = 1e-3);
        assert_abs_diff_eq!(put, 6.9359, epsilon = 1e-3);
    }

    #[test]
    fn textbook_call() {
        // S=100, K=100, r=5%, σ=20%, T=1 ≈ 10.4506
        let call = black_scholes_call(100.0, 100.0, 1.0, 0.05, 0.2);
        assert_abs_diff_eq!(call, 10.4506, epsilon = 1e-4);
    }

    #[test]
    fn price_dispatches_on_type() {
        let call = black_scholes_price(OptionType::Call, 110.0, 100.0, 0.5, 0.03, 0.25);
        let put = black_scholes_price(OptionType::Put, 110.0, 100.0, 0.5, 0.03, 0.25);
        assert_eq!(call, black_scholes_call(110.0, 100.0, 0.5, 0.03, 0.25));
        assert_eq!(put, black_scholes_put(110.0, 100.0, 0.5, 0.03, 0.25));
    }

    #[test]
    fn deep_itm_call_and_otm_put() {
        let call = black_scholes_call(200.0, 100.0, 1.0, 0.05, 0.2);
        let put = black_scholes_put(200.0, 100.0, 1.0, 0.05, 0.2);
        assert!(call > 100.0, "call = {call}");
        assert!(put < 1e-3, "put = {put}");
    }

    #[test]
    fn degenerate_inputs_propagate_non_finite_values() {
        // 0/0 in d1
        assert!(black_scholes_call(100.0, 100.0, 1.0, 0.0, 0.0).is_nan());
        assert!(black_scholes_put(100.0, 100.0, 0.0, 0.02, 0.2).is_nan());
        assert!(black_scholes_call(100.0, -5.0, 1.0, 0.02, 0.2).is_nan());
    }

    #[test]
    fn engine_matches_free_functions() {
        let engine = AnalyticEuropeanEngine::new(100.0, 0.02, 0.2).unwrap();
        let call = EuropeanOption::call(95.0, 0.75).unwrap();
        let res = call.price(&engine).unwrap();
        assert_abs_diff_eq!(
            res.npv,
            black_scholes_call(100.0, 95.0, 0.75, 0.02, 0.2),
            epsilon = 1e-14
        );
        let delta = res.result("delta").unwrap();
        assert!(delta > 0.5 && delta < 1.0, "delta = {delta}");
        assert!(res.result("gamma").unwrap() > 0.0);
        assert!(res.result("vega").unwrap() > 0.0);
    }

    #[test]
    fn engine_delta_matches_finite_difference() {
        let h = 1e-4;
        let up = black_scholes_put(100.0 + h, 100.0, 1.0, 0.02, 0.2);
        let down = black_scholes_put(100.0 - h, 100.0, 1.0, 0.02, 0.2);
        let engine = AnalyticEuropeanEngine::new(100.0, 0.02, 0.2).unwrap();
        let res = EuropeanOption::put(100.0, 1.0).unwrap().price(&engine).unwrap();
        assert_abs_diff_eq!(res.result("delta").unwrap(), (up - down) / (2.0 * h), epsilon = 1e-6);
    }

    #[test]
    fn engine_rejects_invalid_market() {
        assert!(AnalyticEuropeanEngine::new(0.0, 0.02, 0.2).is_err());
        assert!(AnalyticEuropeanEngine::new(100.0, 0.02, 0.0).is_err());
        assert!(AnalyticEuropeanEngine::new(100.0, Real::NAN, 0.2).is_err());
    }

    proptest! {
        #[test]
        fn put_call_parity(
            s in 10.0f64..300.0,
            k in 10.0f64..300.0,
            t in 0.05f64..5.0,
            r in -0.02f64..0.1,
            sigma in 0.05f64..1.0,
        ) {
            let call = black_scholes_call(s, k, t, r, sigma);
            let put = black_scholes_put(s, k, t, r, sigma);
            let forward_value = s - k * (-r * t).exp();
            prop_assert!((call - put - forward_value).abs() < 1e-9 * s.max(k));
        }
    }
}

//! Merton jump-diffusion series engine.
//!
//! Approximates the Merton (1976) option price as a Poisson-weighted
//! mixture of Black-Scholes prices, truncated after a fixed number of terms
//! (40 by default):
//!
//! ```text
//! price = Σ_{k=0}^{N−1} w_k · BS(S, K, T, r_k, σ_k)
//!   r_k = r − λ(m − 1) + k·ln(m)/T
//!   σ_k = √(σ² + k·v²/T)
//!   w_k = e^(−mλT)·(mλT)^k / k!
//! ```
//!
//! The jump mean `m` enters the weights multiplicatively, as a mean jump
//! *multiplier*, while the path simulator uses the same symbol additively
//! as the mean log-jump. Both usages are kept as written; which one the
//! formula intends is unresolved, so callers comparing simulated and
//! closed-form prices should not expect them to agree when jumps are on.
//!
//! Two evaluation details keep the series finite where the literal formula
//! would produce `0·∞`: the `k·ln(m)/T` term is taken as zero for `k = 0`,
//! and terms whose weight is exactly zero are skipped. With `λ = 0` (or
//! `m = 0`) only the `k = 0` term survives, so the series collapses to a
//! single Black-Scholes price.

use crate::analytic_european_engine::black_scholes_price;
use jd_core::{ensure, errors::Result, Price, Rate, Real, Size, Time, Volatility};
use jd_instruments::{EuropeanOptionArguments, OptionType, PricingEngine, PricingResults};
use jd_math::distributions::{poisson_weight, PoissonDistribution};
use jd_processes::Merton76Process;

/// Number of series terms used unless configured otherwise.
pub const DEFAULT_SERIES_TERMS: Size = 40;

/// Truncation rule for the Merton series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTruncation {
    terms: Size,
    tolerance: Option<Real>,
}

impl Default for SeriesTruncation {
    fn default() -> Self {
        Self {
            terms: DEFAULT_SERIES_TERMS,
            tolerance: None,
        }
    }
}

impl SeriesTruncation {
    /// Sum exactly `terms` terms (k = 0..terms).
    pub fn new(terms: Size) -> Result<Self> {
        ensure!(terms >= 1, "series needs at least one term, got {terms}");
        Ok(Self {
            terms,
            tolerance: None,
        })
    }

    /// Also stop early once past the Poisson mean and a term's absolute
    /// contribution falls below `tolerance`.
    pub fn with_tolerance(self, tolerance: Real) -> Result<Self> {
        ensure!(
            tolerance.is_finite() && tolerance > 0.0,
            "tolerance must be positive, got {tolerance}"
        );
        Ok(Self {
            tolerance: Some(tolerance),
            ..self
        })
    }

    /// Maximum number of terms.
    pub fn terms(&self) -> Size {
        self.terms
    }

    /// Early-exit tolerance, if any.
    pub fn tolerance(&self) -> Option<Real> {
        self.tolerance
    }
}

/// Outcome of a series evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MertonSeries {
    /// The summed price.
    pub price: Price,
    /// Number of indices visited, including skipped zero-weight terms.
    pub terms_used: Size,
    /// Sum of the weights of the terms that contributed.
    pub weight_sum: Real,
}

/// Evaluate the truncated Merton series for one option.
#[allow(clippy::too_many_arguments)]
pub fn merton_jump_series(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    maturity: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
    jump_mean: Real,
    jump_vol: Real,
    jump_intensity: Real,
    truncation: &SeriesTruncation,
) -> MertonSeries {
    let t = maturity;
    let poisson_mean = jump_mean * jump_intensity * t;
    let log_mean = jump_mean.ln();
    let base_rate = risk_free_rate - jump_intensity * (jump_mean - 1.0);

    let mut series = MertonSeries {
        price: 0.0,
        terms_used: 0,
        weight_sum: 0.0,
    };

    for k in 0..truncation.terms {
        series.terms_used = k + 1;
        let weight = poisson_weight(poisson_mean, k as u64);
        if weight == 0.0 {
            continue;
        }

        let kf = k as Real;
        let rate_k = if k == 0 {
            base_rate
        } else {
            base_rate + kf * log_mean / t
        };
        let vol_k = (volatility * volatility + kf * jump_vol * jump_vol / t).sqrt();
        let term = weight * black_scholes_price(option_type, spot, strike, t, rate_k, vol_k);
        tracing::trace!(k, weight, rate_k, vol_k, term, "merton series term");

        series.price += term;
        series.weight_sum += weight;

        if let Some(tol) = truncation.tolerance {
            if kf > poisson_mean && term.abs() < tol {
                break;
            }
        }
    }
    series
}

/// Merton series price for either option type.
#[allow(clippy::too_many_arguments)]
pub fn merton_jump_price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    maturity: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
    jump_mean: Real,
    jump_vol: Real,
    jump_intensity: Real,
    truncation: &SeriesTruncation,
) -> Price {
    merton_jump_series(
        option_type,
        spot,
        strike,
        maturity,
        risk_free_rate,
        volatility,
        jump_mean,
        jump_vol,
        jump_intensity,
        truncation,
    )
    .price
}

/// Merton jump-diffusion call price with the default 40-term truncation.
#[allow(clippy::too_many_arguments)]
pub fn merton_jump_call(
    spot: Real,
    strike: Real,
    maturity: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
    jump_mean: Real,
    jump_vol: Real,
    jump_intensity: Real,
) -> Price {
    merton_jump_price(
        OptionType::Call,
        spot,
        strike,
        maturity,
        risk_free_rate,
        volatility,
        jump_mean,
        jump_vol,
        jump_intensity,
        &SeriesTruncation::default(),
    )
}

/// Merton jump-diffusion put price with the default 40-term truncation.
#[allow(clippy::too_many_arguments)]
pub fn merton_jump_put(
    spot: Real,
    strike: Real,
    maturity: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
    jump_mean: Real,
    jump_vol: Real,
    jump_intensity: Real,
) -> Price {
    merton_jump_price(
        OptionType::Put,
        spot,
        strike,
        maturity,
        risk_free_rate,
        volatility,
        jump_mean,
        jump_vol,
        jump_intensity,
        &SeriesTruncation::default(),
    )
}

/// Analytic series engine for European options under the Merton model.
///
/// Reports `terms` (indices visited), `weight_sum` and, when the Poisson
/// mean `mλT` is positive, `poisson_tail` (the probability mass beyond the
/// last term) as additional results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MertonJumpEngine {
    spot: Real,
    risk_free_rate: Rate,
    volatility: Volatility,
    jump_mean: Real,
    jump_vol: Real,
    jump_intensity: Real,
    truncation: SeriesTruncation,
}

impl MertonJumpEngine {
    /// Create a new engine with the default truncation.
    ///
    /// Fails unless `spot > 0`, `volatility > 0`, `jump_vol >= 0`,
    /// `jump_intensity >= 0` and every argument is finite.
    pub fn new(
        spot: Real,
        risk_free_rate: Rate,
        volatility: Volatility,
        jump_mean: Real,
        jump_vol: Real,
        jump_intensity: Real,
    ) -> Result<Self> {
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
        ensure!(jump_mean.is_finite(), "jump mean must be finite, got {jump_mean}");
        ensure!(
            jump_vol.is_finite() && jump_vol >= 0.0,
            "jump volatility must be non-negative, got {jump_vol}"
        );
        ensure!(
            jump_intensity.is_finite() && jump_intensity >= 0.0,
            "jump intensity must be non-negative, got {jump_intensity}"
        );
        Ok(Self {
            spot,
            risk_free_rate,
            volatility,
            jump_mean,
            jump_vol,
            jump_intensity,
            truncation: SeriesTruncation::default(),
        })
    }

    /// Engine for the parameters of a simulated process, with `m` passed
    /// through unchanged.
    pub fn from_process(process: &Merton76Process) -> Result<Self> {
        Self::new(
            process.spot(),
            process.risk_free_rate(),
            process.volatility(),
            process.log_jump_mean(),
            process.log_jump_vol(),
            process.jump_intensity(),
        )
    }

    /// Replace the truncation rule.
    pub fn with_truncation(self, truncation: SeriesTruncation) -> Self {
        Self { truncation, ..self }
    }

    /// The truncation rule in use.
    pub fn truncation(&self) -> &SeriesTruncation {
        &self.truncation
    }

    /// Series prices for several strikes at once.
    pub fn prices(&self, option_type: OptionType, strikes: &[Real], maturity: Time) -> Vec<Price> {
        strikes
            .iter()
            .map(|&k| self.series(option_type, k, maturity).price)
            .collect()
    }

    fn series(&self, option_type: OptionType, strike: Real, maturity: Time) -> MertonSeries {
        merton_jump_series(
            option_type,
            self.spot,
            strike,
            maturity,
            self.risk_free_rate,
            self.volatility,
            self.jump_mean,
            self.jump_vol,
            self.jump_intensity,
            &self.truncation,
        )
    }
}

impl PricingEngine<EuropeanOptionArguments> for MertonJumpEngine {
    fn calculate(&self, args: &EuropeanOptionArguments) -> Result<PricingResults> {
        let series = self.series(args.payoff.option_type, args.payoff.strike, args.maturity);
        tracing::debug!(
            option_type = %args.payoff.option_type,
            strike = args.payoff.strike,
            maturity = args.maturity,
            price = series.price,
            terms = series.terms_used,
            "merton series price"
        );

        let mut results = PricingResults::from_npv(series.price)
            .with_result("terms", series.terms_used as Real)
            .with_result("weight_sum", series.weight_sum);

        let poisson_mean = self.jump_mean * self.jump_intensity * args.maturity;
        if poisson_mean > 0.0 {
            let tail = PoissonDistribution::new(poisson_mean)?.sf(series.terms_used as u64 - 1);
            if tail > 1e-10 {
                tracing::warn!(
                    poisson_mean,
                    terms = series.terms_used,
                    tail,
                    "merton series truncated with non-negligible Poisson tail"
                );
            }
            results = results.with_result("poisson_tail", tail);
        }
        Ok(results)
    }
}

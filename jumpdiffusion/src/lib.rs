//! # jumpdiffusion
//!
//! Simulated price paths and option prices under the Merton jump-diffusion
//! model, alongside the Black-Scholes baseline.
//!
//! This crate is a **façade** over the workspace crates. Besides
//! re-exporting them it offers the plain function-call API:
//!
//! - [`simulate`] / [`simulate_with_rng`]: a `steps × numpaths` ensemble of
//!   jump-diffusion price paths
//! - [`black_scholes_call`] / [`black_scholes_put`]
//! - [`merton_jump_call`] / [`merton_jump_put`]: 40-term Merton series
//!
//! ## Quick start
//!
//! ```rust
//! use jumpdiffusion::{black_scholes_call, merton_jump_call, simulate_with_rng};
//! use jumpdiffusion::math::seeded_rng;
//!
//! let paths = simulate_with_rng(100.0, 1.0, 0.02, 0.2, 1.0, 0.0, 0.3, 252, 4, &mut seeded_rng(7))?;
//! assert_eq!(paths.shape(), (252, 4));
//!
//! let bs = black_scholes_call(100.0, 100.0, 1.0, 0.02, 0.2);
//! let mj = merton_jump_call(100.0, 100.0, 1.0, 0.02, 0.2, 0.0, 0.0, 0.0);
//! assert!((bs - mj).abs() < 1e-12);
//! # Ok::<(), jumpdiffusion::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Scenario configuration (defaults, TOML loading).
pub mod config;

/// Core types, aliases, and error definitions.
pub use jd_core as core;

/// Distributions, random number generation, statistics.
pub use jd_math as math;

/// Stochastic process definitions.
pub use jd_processes as processes;

/// European options and the pricing-engine interface.
pub use jd_instruments as instruments;

/// Monte Carlo path simulation.
pub use jd_methods as methods;

/// Pricing engines.
pub use jd_pricingengines as pricingengines;

pub use config::ScenarioConfig;
pub use jd_methods::PathEnsemble;
pub use jd_pricingengines::{
    black_scholes_call, black_scholes_put, merton_jump_call, merton_jump_put,
};

use jd_core::{errors::Result, Rate, Real, Size, Time, Volatility};
use jd_methods::JumpDiffusionPathGenerator;
use jd_processes::Merton76Process;
use rand::Rng;

/// Simulate `numpaths` jump-diffusion price paths of `steps` steps each,
/// drawing from a freshly entropy-seeded generator.
///
/// Every call gives a different ensemble; use [`simulate_with_rng`] with a
/// seeded generator for reproducible output.
#[allow(clippy::too_many_arguments)]
pub fn simulate(
    spot: Real,
    maturity: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
    jump_intensity: Real,
    jump_mean: Real,
    jump_vol: Real,
    steps: Size,
    numpaths: Size,
) -> Result<PathEnsemble> {
    simulate_with_rng(
        spot,
        maturity,
        risk_free_rate,
        volatility,
        jump_intensity,
        jump_mean,
        jump_vol,
        steps,
        numpaths,
        &mut jd_math::entropy_rng(),
    )
}

/// [`simulate`] with an injected random generator.
///
/// Fails with `Error::InvalidParameter` before drawing anything if
/// `spot <= 0`, `maturity <= 0`, `volatility`, `jump_intensity` or
/// `jump_vol` is negative, any parameter is non-finite, or `steps` /
/// `numpaths` is zero.
#[allow(clippy::too_many_arguments)]
pub fn simulate_with_rng<R: Rng + ?Sized>(
    spot: Real,
    maturity: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
    jump_intensity: Real,
    jump_mean: Real,
    jump_vol: Real,
    steps: Size,
    numpaths: Size,
    rng: &mut R,
) -> Result<PathEnsemble> {
    let process = Merton76Process::new(
        spot,
        risk_free_rate,
        volatility,
        jump_intensity,
        jump_mean,
        jump_vol,
    )?;
    let generator = JumpDiffusionPathGenerator::new(process, maturity, steps, numpaths)?;
    Ok(generator.simulate(rng))
}

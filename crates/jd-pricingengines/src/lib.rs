//! # jd-pricingengines
//!
//! Pricing engines for European options under Black-Scholes and Merton
//! jump-diffusion dynamics.
//!
//! ## Engines
//!
//! - [`AnalyticEuropeanEngine`]: Black-Scholes closed form
//! - [`MertonJumpEngine`]: truncated Poisson mixture of Black-Scholes prices
//! - [`McJumpDiffusionEngine`]: plain Monte Carlo over simulated ensembles
//!
//! The free functions ([`black_scholes_call`], [`merton_jump_call`], ...)
//! evaluate the formulas without validation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod mc_jump_diffusion_engine;
pub mod merton_jump_engine;

pub use analytic_european_engine::{
    black_scholes_call, black_scholes_d1_d2, black_scholes_price, black_scholes_put,
    AnalyticEuropeanEngine,
};
pub use mc_jump_diffusion_engine::McJumpDiffusionEngine;
pub use merton_jump_engine::{
    merton_jump_call, merton_jump_price, merton_jump_put, merton_jump_series, MertonJumpEngine,
    MertonSeries, SeriesTruncation, DEFAULT_SERIES_TERMS,
};

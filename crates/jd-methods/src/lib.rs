//! # jd-methods
//!
//! Numerical methods: Monte Carlo simulation of jump-diffusion path
//! ensembles and plain Monte Carlo estimation over them.
//!
//! # Modules
//!
//! * [`monte_carlo`]: time grid, path generation, path pricing, statistics

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Monte Carlo simulation: path generation, pricing, statistics.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use monte_carlo::{
    evaluate, mc_european_price, EuropeanPathPricer, JumpDiffusionPathGenerator,
    LogPathComponents, MonteCarloModel, PathEnsemble, PathPricer, TimeGrid,
};

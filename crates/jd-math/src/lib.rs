//! # jd-math
//!
//! Mathematical utilities for the jump-diffusion workspace: the standard
//! normal distribution and Poisson weights (via statrs), a seedable
//! Mersenne Twister usable as an injected `rand` generator, and a
//! statistics accumulator for Monte Carlo estimates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_pdf, poisson_weight, PoissonDistribution};
pub use random_numbers::{entropy_rng, seeded_rng, MersenneTwisterUniformRng};
pub use statistics::Statistics;

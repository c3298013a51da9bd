//! Probability distributions.
//!
//! The standard normal distribution used by the Black-Scholes formulas and
//! the Poisson weights used by the Merton series, delegating to the
//! `statrs` crate where appropriate.

pub mod normal;
pub mod poisson;

pub use normal::{normal_cdf, normal_pdf};
pub use poisson::{poisson_weight, PoissonDistribution};

//! # jd-instruments
//!
//! European options on a single underlying, their payoffs, and the
//! [`PricingEngine`] interface implemented by the analytic, series, and
//! Monte Carlo engines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod instrument;
pub mod option;
pub mod payoff;

pub use instrument::{PricingEngine, PricingResults};
pub use option::{EuropeanOption, EuropeanOptionArguments};
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};

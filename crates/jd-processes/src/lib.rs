//! # jd-processes
//!
//! Stochastic process definitions.
//!
//! [`Merton76Process`] carries the parameters of the jump-diffusion SDE
//! and the per-step increments the path simulators combine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod merton76_process;

pub use merton76_process::Merton76Process;

//! The pricing-engine seam.
//!
//! Instruments hand an argument struct to a [`PricingEngine`] and get back
//! [`PricingResults`]: the NPV, a standard error when the engine is a
//! simulation, and engine-specific diagnostics keyed by name.

use jd_core::{errors::Result, Real};
use std::collections::BTreeMap;

/// Output of one engine call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingResults {
    /// Net present value.
    pub npv: Real,
    /// Standard error of the NPV, for Monte Carlo engines.
    pub error_estimate: Option<Real>,
    /// Engine diagnostics such as `terms` or `delta`, ordered by key.
    pub diagnostics: BTreeMap<&'static str, Real>,
}

impl PricingResults {
    /// Results holding only an NPV.
    pub fn from_npv(npv: Real) -> Self {
        Self {
            npv,
            ..Self::default()
        }
    }

    /// Set the standard error.
    pub fn with_error_estimate(self, error: Real) -> Self {
        Self {
            error_estimate: Some(error),
            ..self
        }
    }

    /// Record a diagnostic, replacing any previous value under `key`.
    pub fn with_result(mut self, key: &'static str, value: Real) -> Self {
        self.diagnostics.insert(key, value);
        self
    }

    /// The diagnostic recorded under `key`.
    pub fn result(&self, key: &str) -> Option<Real> {
        self.diagnostics.get(key).copied()
    }
}

/// Prices instruments described by `Args`.
pub trait PricingEngine<Args>: std::fmt::Debug {
    /// Price the instrument described by `args`.
    fn calculate(&self, args: &Args) -> Result<PricingResults>;
}

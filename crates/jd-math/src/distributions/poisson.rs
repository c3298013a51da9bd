//! Poisson distribution and Poisson mixture weights.
//!
//! Wraps the `statrs` crate's Poisson implementation.

use jd_core::{ensure, errors::Result, Real};
use statrs::distribution::{Discrete, DiscreteCDF, Poisson};
use statrs::function::factorial::factorial;

/// The `k`-th Poisson mixture weight `e^(−μ)·μ^k / k!`.
///
/// Unlike [`PoissonDistribution::pmf`] this is evaluated literally for any
/// real `μ`, including zero (`μ^0 = 1`) and negative values, so the series
/// pricers can reproduce their reference formula outside the probabilistic
/// range.
#[inline]
pub fn poisson_weight(mean: Real, k: u64) -> Real {
    (-mean).exp() * mean.powi(k as i32) / factorial(k)
}

/// Poisson distribution with mean `lambda`.
#[derive(Debug, Clone)]
pub struct PoissonDistribution {
    dist: Poisson,
    lambda: Real,
}

impl PoissonDistribution {
    /// Create a Poisson distribution with the given mean `lambda`.
    ///
    /// Fails with `Error::InvalidParameter` unless `lambda > 0`.
    pub fn new(lambda: Real) -> Result<Self> {
        ensure!(lambda > 0.0, "Poisson mean must be positive, got {lambda}");
        let dist = Poisson::new(lambda).map_err(|e| {
            jd_core::Error::InvalidParameter(format!("Poisson mean {lambda}: {e}"))
        })?;
        Ok(Self { dist, lambda })
    }

    /// Mean parameter λ.
    pub fn lambda(&self) -> Real {
        self.lambda
    }

    /// Probability mass function P(X = k).
    pub fn pmf(&self, k: u64) -> Real {
        self.dist.pmf(k)
    }

    /// Cumulative distribution function P(X ≤ k).
    pub fn cdf(&self, k: u64) -> Real {
        self.dist.cdf(k)
    }

    /// Upper tail P(X > k).
    pub fn sf(&self, k: u64) -> Real {
        self.dist.sf(k)
    }
}

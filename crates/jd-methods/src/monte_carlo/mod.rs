//! Monte Carlo simulation framework.
//!
//! # Overview
//!
//! * [`JumpDiffusionPathGenerator`]: simulates ensembles of jump-diffusion paths
//! * [`PathEnsemble`]: a `steps × paths` matrix of simulated prices
//! * [`PathPricer`]: trait for evaluating payoffs on simulated paths
//! * [`MonteCarloModel`]: runs a pricer over an ensemble and collects statistics

mod path_ensemble;
mod path_generator;
mod time_grid;

pub use path_ensemble::{LogPathComponents, PathEnsemble};
pub use path_generator::JumpDiffusionPathGenerator;
pub use time_grid::TimeGrid;

use jd_core::{DiscountFactor, Real};
use jd_math::Statistics;
use rand::Rng;

// ─── PathPricer ───────────────────────────────────────────────────────────────

/// A trait for computing the discounted payoff from a sample path.
pub trait PathPricer {
    /// Evaluate the discounted payoff for a path given in time order.
    fn value(&self, path: &[Real]) -> Real;
}

/// A European payoff pricer: evaluates `payoff(S_T) * discount`.
pub struct EuropeanPathPricer<F> {
    payoff: F,
    discount: DiscountFactor,
}

impl<F: Fn(Real) -> Real> EuropeanPathPricer<F> {
    /// Create a European pricer with payoff function and discount factor.
    pub fn new(payoff: F, discount: DiscountFactor) -> Self {
        Self { payoff, discount }
    }
}

impl<F: Fn(Real) -> Real> PathPricer for EuropeanPathPricer<F> {
    fn value(&self, path: &[Real]) -> Real {
        path.last()
            .map_or(0.0, |&s| (self.payoff)(s) * self.discount)
    }
}

// ─── MonteCarloModel ──────────────────────────────────────────────────────────

/// Combines a path generator with statistics collection.
#[derive(Debug, Clone)]
pub struct MonteCarloModel {
    generator: JumpDiffusionPathGenerator,
}

impl MonteCarloModel {
    /// Create a new Monte Carlo model around a path generator.
    pub fn new(generator: JumpDiffusionPathGenerator) -> Self {
        Self { generator }
    }

    /// The underlying generator.
    pub fn generator(&self) -> &JumpDiffusionPathGenerator {
        &self.generator
    }

    /// Simulate one ensemble and return the pricer's statistics over it.
    pub fn simulate<R: Rng + ?Sized>(&self, pricer: &dyn PathPricer, rng: &mut R) -> Statistics {
        let ensemble = self.generator.simulate(rng);
        evaluate(&ensemble, pricer)
    }
}

/// Statistics of `pricer` over every path of `ensemble`.
pub fn evaluate(ensemble: &PathEnsemble, pricer: &dyn PathPricer) -> Statistics {
    ensemble.paths().map(|p| pricer.value(p)).collect()
}

/// Monte Carlo price of a European payoff over an already simulated
/// ensemble.
///
/// Returns `(mean, std_error)`; the error is zero for a single path.
pub fn mc_european_price(
    ensemble: &PathEnsemble,
    payoff: impl Fn(Real) -> Real,
    discount: DiscountFactor,
) -> (Real, Real) {
    let pricer = EuropeanPathPricer::new(payoff, discount);
    let stats = evaluate(ensemble, &pricer);
    (
        stats.mean().unwrap_or(0.0),
        stats.error_estimate().unwrap_or(0.0),
    )
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use jd_math::{normal_cdf, seeded_rng};
    use jd_processes::Merton76Process;
    use nalgebra::DMatrix;

    fn bs_call(s: Real, k: Real, t: Real, r: Real, sigma: Real) -> Real {
        let sd = sigma * t.sqrt();
        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sd;
        s * normal_cdf(d1) - k * (-r * t).exp() * normal_cdf(d1 - sd)
    }

    #[test]
    fn european_pricer_uses_terminal_value() {
        let pricer = EuropeanPathPricer::new(|s: Real| (s - 100.0).max(0.0), 0.5);
        assert_eq!(pricer.value(&[90.0, 130.0, 110.0]), 5.0);
        assert_eq!(pricer.value(&[]), 0.0);
    }

    #[test]
    fn mc_price_over_fixed_ensemble() {
        let ensemble = PathEnsemble::from_matrix(DMatrix::from_column_slice(
            2,
            3,
            &[100.0, 110.0, 100.0, 90.0, 100.0, 120.0],
        ));
        let (price, err) = mc_european_price(&ensemble, |s| (s - 100.0).max(0.0), 1.0);
        assert_abs_diff_eq!(price, 10.0, epsilon = 1e-12);
        assert!(err > 0.0);
    }

    #[test]
    fn mc_call_without_jumps_converges_to_black_scholes() {
        let process = Merton76Process::new(100.0, 0.02, 0.2, 0.0, 0.0, 0.3).unwrap();
        let gen = JumpDiffusionPathGenerator::new(process, 1.0, 4, 100_000).unwrap();
        let model = MonteCarloModel::new(gen);
        let pricer = EuropeanPathPricer::new(|s: Real| (s - 100.0).max(0.0), (-0.02_f64).exp());
        let stats = model.simulate(&pricer, &mut seeded_rng(42));

        let price = stats.mean().unwrap();
        let stderr = stats.error_estimate().unwrap();
        let reference = bs_call(100.0, 100.0, 1.0, 0.02, 0.2);
        assert!(
            (price - reference).abs() < 4.0 * stderr,
            "MC call = {price:.4} ± {stderr:.4}, expected {reference:.4}"
        );
    }
}

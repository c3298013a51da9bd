//! Monte Carlo engine for European options on a simulated jump-diffusion.
//!
//! Simulates one ensemble with a seeded generator and averages the
//! discounted payoff of the terminal prices. No variance reduction is
//! applied.

use jd_core::{errors::Result, Error, Real};
use jd_instruments::{EuropeanOptionArguments, Payoff, PricingEngine, PricingResults};
use jd_math::seeded_rng;
use jd_methods::{EuropeanPathPricer, JumpDiffusionPathGenerator, MonteCarloModel};

/// Plain Monte Carlo engine over [`JumpDiffusionPathGenerator`] ensembles.
///
/// The option maturity must equal the generator's horizon. The same seed
/// always reproduces the same estimate.
#[derive(Debug, Clone)]
pub struct McJumpDiffusionEngine {
    model: MonteCarloModel,
    seed: u64,
}

impl McJumpDiffusionEngine {
    /// Create a new engine.
    pub fn new(generator: JumpDiffusionPathGenerator, seed: u64) -> Self {
        Self {
            model: MonteCarloModel::new(generator),
            seed,
        }
    }
}

impl PricingEngine<EuropeanOptionArguments> for McJumpDiffusionEngine {
    fn calculate(&self, args: &EuropeanOptionArguments) -> Result<PricingResults> {
        let generator = self.model.generator();
        let horizon = generator.time_grid().maturity();
        if (horizon - args.maturity).abs() > 1e-12 * horizon.max(1.0) {
            return Err(Error::Precondition(format!(
                "option maturity {} does not match simulation horizon {horizon}",
                args.maturity
            )));
        }

        let discount = (-generator.process().risk_free_rate() * args.maturity).exp();
        let payoff = args.payoff;
        let pricer = EuropeanPathPricer::new(move |s: Real| payoff.value(s), discount);
        let stats = self.model.simulate(&pricer, &mut seeded_rng(self.seed));

        let npv = stats.mean().unwrap_or(0.0);
        let error = stats.error_estimate().unwrap_or(0.0);
        tracing::debug!(
            option_type = %payoff.option_type,
            strike = payoff.strike,
            npv,
            error,
            paths = stats.samples(),
            "monte carlo price"
        );

        Ok(PricingResults::from_npv(npv)
            .with_error_estimate(error)
            .with_result("paths", stats.samples() as Real))
    }
}

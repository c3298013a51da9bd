//! Scenario configuration.
//!
//! A [`ScenarioConfig`] bundles the model, simulation and pricing inputs of
//! one run. Its defaults are the reference scenario (S = 100, T = 1,
//! r = 0.02, σ = 0.2, λ = 1, m = 0, v = 0.3, 10 000 steps, one path, strike
//! 100, 40 series terms); any subset can be overridden from TOML:
//!
//! ```toml
//! jump_intensity = 2.5
//! num_paths = 16
//! seed = 42
//! ```

use jd_core::{ensure, errors::Result, Error, Rate, Real, Size, Time, Volatility};
use jd_math::{entropy_rng, seeded_rng, MersenneTwisterUniformRng};
use jd_methods::JumpDiffusionPathGenerator;
use jd_pricingengines::{MertonJumpEngine, SeriesTruncation, DEFAULT_SERIES_TERMS};
use jd_processes::Merton76Process;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inputs of one simulation and pricing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Initial price S.
    pub spot: Real,
    /// Horizon T in years.
    pub maturity: Time,
    /// Risk-free rate r.
    pub risk_free_rate: Rate,
    /// Diffusion volatility σ.
    pub volatility: Volatility,
    /// Jump intensity λ, jumps per year.
    pub jump_intensity: Real,
    /// Jump mean m.
    pub jump_mean: Real,
    /// Jump-size standard deviation v.
    pub jump_vol: Real,
    /// Number of time steps.
    pub steps: Size,
    /// Number of simulated paths.
    pub num_paths: Size,
    /// Strike used for the closed-form comparison.
    pub strike: Real,
    /// Merton series truncation depth.
    pub series_terms: Size,
    /// Seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            maturity: 1.0,
            risk_free_rate: 0.02,
            volatility: 0.2,
            jump_intensity: 1.0,
            jump_mean: 0.0,
            jump_vol: 0.3,
            steps: 10_000,
            num_paths: 1,
            strike: 100.0,
            series_terms: DEFAULT_SERIES_TERMS,
            seed: None,
        }
    }
}

impl ScenarioConfig {
    /// Parse a configuration from TOML text. Missing keys keep their
    /// defaults; unknown keys are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded scenario configuration");
        Ok(config)
    }

    /// Check every field before any computation runs.
    pub fn validate(&self) -> Result<()> {
        self.process()?;
        self.path_generator()?;
        ensure!(
            self.strike.is_finite() && self.strike > 0.0,
            "strike must be positive, got {}",
            self.strike
        );
        ensure!(
            self.volatility > 0.0,
            "volatility must be positive for closed-form pricing, got {}",
            self.volatility
        );
        SeriesTruncation::new(self.series_terms)?;
        Ok(())
    }

    /// The jump-diffusion process described by this scenario.
    pub fn process(&self) -> Result<Merton76Process> {
        Merton76Process::new(
            self.spot,
            self.risk_free_rate,
            self.volatility,
            self.jump_intensity,
            self.jump_mean,
            self.jump_vol,
        )
    }

    /// A path generator for this scenario.
    pub fn path_generator(&self) -> Result<JumpDiffusionPathGenerator> {
        JumpDiffusionPathGenerator::new(self.process()?, self.maturity, self.steps, self.num_paths)
    }

    /// The Merton series engine for this scenario.
    pub fn merton_engine(&self) -> Result<MertonJumpEngine> {
        let engine = MertonJumpEngine::from_process(&self.process()?)?;
        Ok(engine.with_truncation(SeriesTruncation::new(self.series_terms)?))
    }

    /// The generator to simulate with: seeded if `seed` is set.
    pub fn rng(&self) -> MersenneTwisterUniformRng {
        match self.seed {
            Some(seed) => seeded_rng(seed),
            None => entropy_rng(),
        }
    }
}

//! Jump-diffusion path generation.

use super::path_ensemble::{LogPathComponents, PathEnsemble};
use super::time_grid::TimeGrid;
use jd_core::{ensure, errors::Result, Error, Real, Size, Time};
use jd_processes::Merton76Process;
use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson, StandardNormal};

/// Generates ensembles of Merton jump-diffusion price paths.
///
/// For every (step, path) cell three independent draws are made from the
/// injected generator, in this order: a jump count from
/// `Poisson(λ·dt)`, one jump size from `N(m, v²)`, and a standard normal
/// for the Brownian increment. The cell contributes `count × size` to the
/// running jump sum and
/// `(r − σ²/2 − λ(m + v²/2))·dt + σ·√dt·z` to the running diffusion sum;
/// the price is `S·exp(diffusion + jumps)`.
#[derive(Debug, Clone)]
pub struct JumpDiffusionPathGenerator {
    process: Merton76Process,
    grid: TimeGrid,
    num_paths: Size,
    jump_counts: Option<Poisson<f64>>,
    jump_sizes: Normal<f64>,
}

impl JumpDiffusionPathGenerator {
    /// Create a generator over `steps` uniform intervals of `(0, maturity]`.
    ///
    /// Fails unless `maturity > 0`, `steps >= 1` and `num_paths >= 1`.
    pub fn new(
        process: Merton76Process,
        maturity: Time,
        steps: Size,
        num_paths: Size,
    ) -> Result<Self> {
        let grid = TimeGrid::uniform(maturity, steps)?;
        ensure!(num_paths >= 1, "number of paths must be at least 1, got {num_paths}");

        let rate = process.jump_rate(grid.dt());
        let jump_counts = if rate > 0.0 {
            Some(Poisson::new(rate).map_err(|e| {
                Error::InvalidParameter(format!("jump count rate {rate}: {e}"))
            })?)
        } else {
            None
        };
        let jump_sizes = Normal::new(process.log_jump_mean(), process.log_jump_vol())
            .map_err(|e| Error::InvalidParameter(format!("jump size distribution: {e}")))?;

        Ok(Self {
            process,
            grid,
            num_paths,
            jump_counts,
            jump_sizes,
        })
    }

    /// The simulated process.
    pub fn process(&self) -> &Merton76Process {
        &self.process
    }

    /// The simulation time grid.
    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Number of paths per ensemble.
    pub fn num_paths(&self) -> Size {
        self.num_paths
    }

    /// Simulate the cumulative log-price components of a fresh ensemble.
    pub fn generate_components<R: Rng + ?Sized>(&self, rng: &mut R) -> LogPathComponents {
        let steps = self.grid.steps();
        let dt = self.grid.dt();
        tracing::debug!(
            steps,
            num_paths = self.num_paths,
            dt,
            jump_intensity = self.process.jump_intensity(),
            "simulating jump-diffusion ensemble"
        );

        let mut diffusion = DMatrix::<Real>::zeros(steps, self.num_paths);
        let mut jumps = DMatrix::<Real>::zeros(steps, self.num_paths);

        for j in 0..self.num_paths {
            let mut log_diffusion = 0.0;
            let mut log_jumps = 0.0;
            for i in 0..steps {
                let count = match &self.jump_counts {
                    Some(poisson) => {
                        let n: f64 = poisson.sample(rng);
                        n as u64
                    }
                    None => 0,
                };
                let size = self.jump_sizes.sample(rng);
                let z: Real = StandardNormal.sample(rng);

                log_jumps += self.process.jump_increment(count, size);
                log_diffusion += self.process.diffusion_increment(dt, z);
                jumps[(i, j)] = log_jumps;
                diffusion[(i, j)] = log_diffusion;
            }
        }

        LogPathComponents { diffusion, jumps }
    }

    /// Simulate a fresh `steps × num_paths` price ensemble.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> PathEnsemble {
        self.generate_components(rng).prices(self.process.spot())
    }
}

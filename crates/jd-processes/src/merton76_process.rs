//! Merton jump-diffusion process.
//!
//! ```text
//! d ln S = (r − σ²/2 − λ(m + v²/2)) dt + σ dW + J dN
//! ```
//!
//! where `λ` is the jump intensity, `J ~ N(m, v²)` is the log-jump size and
//! `N` is a Poisson process. The drift correction `λ(m + v²/2)` is applied
//! to the log-price as written; it is not the exact martingale compensator
//! `λ(e^(m + v²/2) − 1)`, and the simulated ensembles keep it that way.
//!
//! The discretisation used by the path generators treats each step of
//! length `dt` as contributing `count × J` to the log-price, with a single
//! jump-size draw per step regardless of the count.

use jd_core::{ensure, errors::Result, Rate, Real, Time, Volatility};

/// A Merton (1976) jump-diffusion process for one underlying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merton76Process {
    spot: Real,
    risk_free_rate: Rate,
    volatility: Volatility,
    jump_intensity: Real,
    log_jump_mean: Real,
    log_jump_vol: Real,
}

impl Merton76Process {
    /// Create a new Merton jump-diffusion process.
    ///
    /// # Arguments
    /// * `spot`: initial price S (must be > 0)
    /// * `risk_free_rate`: r
    /// * `volatility`: diffusion volatility σ (must be ≥ 0)
    /// * `jump_intensity`: Poisson intensity λ, jumps per year (must be ≥ 0)
    /// * `log_jump_mean`: mean m of the log-jump size
    /// * `log_jump_vol`: std dev v of the log-jump size (must be ≥ 0)
    ///
    /// Every argument must be finite.
    pub fn new(
        spot: Real,
        risk_free_rate: Rate,
        volatility: Volatility,
        jump_intensity: Real,
        log_jump_mean: Real,
        log_jump_vol: Real,
    ) -> Result<Self> {
        ensure!(
            spot.is_finite() && spot > 0.0,
            "spot must be positive, got {spot}"
        );
        ensure!(
            risk_free_rate.is_finite(),
            "risk-free rate must be finite, got {risk_free_rate}"
        );
        ensure!(
            volatility.is_finite() && volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        ensure!(
            jump_intensity.is_finite() && jump_intensity >= 0.0,
            "jump intensity must be non-negative, got {jump_intensity}"
        );
        ensure!(
            log_jump_mean.is_finite(),
            "log-jump mean must be finite, got {log_jump_mean}"
        );
        ensure!(
            log_jump_vol.is_finite() && log_jump_vol >= 0.0,
            "log-jump volatility must be non-negative, got {log_jump_vol}"
        );
        Ok(Self {
            spot,
            risk_free_rate,
            volatility,
            jump_intensity,
            log_jump_mean,
            log_jump_vol,
        })
    }

    /// The same process with jumps switched off (λ = 0).
    pub fn without_jumps(self) -> Self {
        Self {
            jump_intensity: 0.0,
            ..self
        }
    }

    /// Initial price S.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Risk-free rate r.
    pub fn risk_free_rate(&self) -> Rate {
        self.risk_free_rate
    }

    /// Diffusion volatility σ.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Jump intensity λ.
    pub fn jump_intensity(&self) -> Real {
        self.jump_intensity
    }

    /// Mean m of the log-jump size.
    pub fn log_jump_mean(&self) -> Real {
        self.log_jump_mean
    }

    /// Standard deviation v of the log-jump size.
    pub fn log_jump_vol(&self) -> Real {
        self.log_jump_vol
    }

    /// Drift correction for the jumps, `λ(m + v²/2)`.
    pub fn jump_compensator(&self) -> Real {
        self.jump_intensity
            * (self.log_jump_mean + 0.5 * self.log_jump_vol * self.log_jump_vol)
    }

    /// Log-price drift per unit time, `r − σ²/2 − λ(m + v²/2)`.
    pub fn log_drift(&self) -> Real {
        self.risk_free_rate - 0.5 * self.volatility * self.volatility - self.jump_compensator()
    }

    /// Expected number of jumps over a step of length `dt`.
    pub fn jump_rate(&self, dt: Time) -> Real {
        self.jump_intensity * dt
    }

    /// Diffusion contribution to the log-price over `dt` for a standard
    /// normal draw `z`.
    #[inline]
    pub fn diffusion_increment(&self, dt: Time, z: Real) -> Real {
        self.log_drift() * dt + self.volatility * dt.sqrt() * z
    }

    /// Jump contribution to the log-price over one step: `count × size`.
    #[inline]
    pub fn jump_increment(&self, count: u64, size: Real) -> Real {
        count as Real * size
    }
}

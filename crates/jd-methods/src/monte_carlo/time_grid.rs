//! Uniform simulation time grid.

use jd_core::{ensure, errors::Result, Size, Time};

/// A uniform grid of `steps` intervals over `(0, maturity]`.
///
/// Row `i` of a simulated ensemble holds the state at time `(i + 1)·dt`;
/// the initial time 0 is not a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    maturity: Time,
    steps: Size,
}

impl TimeGrid {
    /// Create a uniform grid from 0 to `maturity` with `steps` intervals.
    ///
    /// Fails unless `maturity > 0` and `steps >= 1`.
    pub fn uniform(maturity: Time, steps: Size) -> Result<Self> {
        ensure!(
            maturity.is_finite() && maturity > 0.0,
            "maturity must be positive, got {maturity}"
        );
        ensure!(steps >= 1, "steps must be at least 1, got {steps}");
        Ok(Self { maturity, steps })
    }

    /// Number of intervals.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Final time.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Interval length `maturity / steps`.
    pub fn dt(&self) -> Time {
        self.maturity / self.steps as Time
    }

    /// Time at the end of step `i` (zero-based).
    pub fn time(&self, i: Size) -> Time {
        (i + 1) as Time * self.dt()
    }

    /// Times at the end of every step, `[dt, 2·dt, …, maturity]`.
    pub fn times(&self) -> Vec<Time> {
        (0..self.steps).map(|i| self.time(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn uniform_grid() {
        let g = TimeGrid::uniform(1.0, 4).unwrap();
        assert_eq!(g.steps(), 4);
        assert_abs_diff_eq!(g.dt(), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(g.time(0), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(g.time(3), 1.0, epsilon = 1e-15);
        assert_eq!(g.times().len(), 4);
    }

    #[test]
    fn rejects_degenerate_grids() {
        assert!(TimeGrid::uniform(1.0, 0).is_err());
        assert!(TimeGrid::uniform(0.0, 10).is_err());
        assert!(TimeGrid::uniform(-1.0, 10).is_err());
    }
}

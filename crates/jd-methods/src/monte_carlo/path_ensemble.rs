//! Simulated path ensembles.

use jd_core::{Real, Size};
use nalgebra::DMatrix;

/// An ensemble of simulated price paths, shaped `steps × num_paths`.
///
/// Each column is one trajectory and each row one time step; the initial
/// price is not stored. Storage is column-major, so a single path is a
/// contiguous slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEnsemble {
    values: DMatrix<Real>,
}

impl PathEnsemble {
    /// Wrap a `steps × num_paths` matrix.
    pub fn from_matrix(values: DMatrix<Real>) -> Self {
        Self { values }
    }

    /// Number of time steps (rows).
    pub fn steps(&self) -> Size {
        self.values.nrows()
    }

    /// Number of paths (columns).
    pub fn num_paths(&self) -> Size {
        self.values.ncols()
    }

    /// `(steps, num_paths)`.
    pub fn shape(&self) -> (Size, Size) {
        self.values.shape()
    }

    /// Value of path `path` at step `step`, if in range.
    pub fn get(&self, step: Size, path: Size) -> Option<Real> {
        self.values.get((step, path)).copied()
    }

    /// The values of one path in time order.
    ///
    /// # Panics
    /// Panics if `path >= num_paths()`.
    pub fn path(&self, path: Size) -> &[Real] {
        let n = self.steps();
        &self.values.as_slice()[path * n..(path + 1) * n]
    }

    /// Iterate over all paths.
    pub fn paths(&self) -> impl Iterator<Item = &[Real]> + '_ {
        let n = self.steps().max(1);
        self.values.as_slice().chunks(n)
    }

    /// Value of every path at the final step.
    pub fn terminal_values(&self) -> Vec<Real> {
        self.paths().filter_map(|p| p.last().copied()).collect()
    }

    /// Borrow the underlying matrix.
    pub fn as_matrix(&self) -> &DMatrix<Real> {
        &self.values
    }
}

/// The two log-price components of a simulated ensemble, each the running
/// sum along the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LogPathComponents {
    /// Cumulative drift-plus-Brownian contribution.
    pub diffusion: DMatrix<Real>,
    /// Cumulative jump contribution.
    pub jumps: DMatrix<Real>,
}

impl LogPathComponents {
    /// Prices `spot · exp(diffusion + jumps)`, elementwise.
    pub fn prices(&self, spot: Real) -> PathEnsemble {
        let log_paths = &self.diffusion + &self.jumps;
        PathEnsemble::from_matrix(log_paths.map(|x| spot * x.exp()))
    }
}

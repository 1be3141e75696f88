//! Stratified Monte Carlo integration.
//!
//! The domain is cut into a `strata × strata` grid and every cell receives
//! `samples_per_stratum` uniform draws from its own [`SampleRng`].  The
//! estimate is the area-weighted sum of cell means; its variance is
//!
//! ```text
//! Var = Σ_cells area² · s²_cell / m
//! ```
//!
//! with `s²_cell` the unbiased sample variance.  The reported error is the
//! confidence half-width `z · √Var`.  For a 0/1 indicator only cells crossed
//! by the decision boundary contribute variance.

use acq_core::{Rect, SampleRng};
use tracing::debug;

use crate::{Integral, Integrand, QuadError, QuadResult, Quadrature};

/// Settings for [`StratifiedMonteCarlo`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloConfig {
    /// Grid cells per axis.
    pub strata: usize,
    /// Draws per cell.  At least 2 so the cell variance is defined.
    pub samples_per_stratum: usize,
    /// Master seed.  The same seed always produces the same estimate.
    pub seed: u64,
    /// Confidence multiplier on the standard error.
    pub z: f64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self { strata: 64, samples_per_stratum: 4, seed: 0, z: 3.0 }
    }
}

impl MonteCarloConfig {
    pub fn validate(&self) -> QuadResult<()> {
        if self.strata == 0 {
            return Err(QuadError::InvalidConfig {
                field:  "strata",
                reason: "must be at least 1".into(),
            });
        }
        if self.samples_per_stratum < 2 {
            return Err(QuadError::InvalidConfig {
                field:  "samples_per_stratum",
                reason: format!("must be at least 2, got {}", self.samples_per_stratum),
            });
        }
        if !(self.z > 0.0) || !self.z.is_finite() {
            return Err(QuadError::InvalidConfig {
                field:  "z",
                reason: format!("must be finite and > 0, got {}", self.z),
            });
        }
        Ok(())
    }
}

/// Stratified sampling estimator.  Deterministic for a fixed seed.
#[derive(Clone, Debug, Default)]
pub struct StratifiedMonteCarlo {
    config: MonteCarloConfig,
}

impl StratifiedMonteCarlo {
    pub fn new(config: MonteCarloConfig) -> QuadResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }
}

impl Quadrature for StratifiedMonteCarlo {
    fn integrate(&self, f: &dyn Integrand, domain: Rect) -> Integral {
        let cfg = &self.config;
        let m = cfg.samples_per_stratum;
        let cells = domain.grid(cfg.strata);

        let mut estimate = 0.0;
        let mut variance = 0.0;
        for (idx, cell) in cells.iter().enumerate() {
            let mut rng = SampleRng::new(cfg.seed, idx as u64);
            let values: Vec<f64> = (0..m)
                .map(|_| {
                    let (u, v) = (rng.unit(), rng.unit());
                    f.eval(cell.lerp(u, v))
                })
                .collect();

            let mean = values.iter().sum::<f64>() / m as f64;
            let var = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (m - 1) as f64;
            let area = cell.area();
            estimate += area * mean;
            variance += area * area * var / m as f64;
        }

        let error = cfg.z * variance.sqrt();
        debug!(strata = cells.len(), samples = cells.len() * m, estimate, error, "stratified sampling finished");

        Integral {
            estimate,
            error,
            evaluations: cells.len() * m,
            regions: cells.len(),
            tolerance: f64::INFINITY,
            converged: true,
        }
    }

    fn name(&self) -> &'static str {
        "stratified-monte-carlo"
    }
}

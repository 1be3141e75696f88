//! Fluent builder for constructing a [`DemandEstimator`].

use acq_choice::TiePolicy;
use acq_core::Parameters;
use acq_quad::{
    AdaptiveCubature, MonteCarloConfig, QuadConfig, Quadrature, StratifiedMonteCarlo,
};

use crate::{DemandEstimator, EstimateError, EstimateResult};

/// Fluent builder for [`DemandEstimator<Q>`].
///
/// # Required inputs
///
/// - [`Parameters`], already validated by construction
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default                                |
/// |-----------------------------|----------------------------------------|
/// | `.quadrature(q)`            | `AdaptiveCubature::default()`          |
/// | `.adaptive(cfg)?`           | validates, then as `.quadrature`      |
/// | `.monte_carlo(cfg)?`        | validates, then as `.quadrature`      |
/// | `.tie_policy(p)`            | `TiePolicy::Inclusive`                 |
/// | `.partition_tolerance(t)`   | `1e-3`                                 |
/// | `.num_threads(n)`           | global Rayon pool (`parallel` only)    |
///
/// # Example
///
/// ```rust,ignore
/// let estimator = DemandEstimatorBuilder::new(params)
///     .adaptive(QuadConfig { max_evals: 200_000, ..Default::default() })?
///     .tie_policy(TiePolicy::Priority)
///     .build()?;
/// let report = estimator.estimate(&mut NoopObserver);
/// ```
pub struct DemandEstimatorBuilder<Q: Quadrature = AdaptiveCubature> {
    parameters:          Parameters,
    quadrature:          Q,
    tie_policy:          TiePolicy,
    partition_tolerance: f64,
    num_threads:         Option<usize>,
}

impl DemandEstimatorBuilder<AdaptiveCubature> {
    /// Create a builder using the default adaptive cubature.
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            quadrature:          AdaptiveCubature::default(),
            tie_policy:          TiePolicy::default(),
            partition_tolerance: 1e-3,
            num_threads:         None,
        }
    }
}

impl<Q: Quadrature> DemandEstimatorBuilder<Q> {
    /// Replace the integration method.
    pub fn quadrature<Q2: Quadrature>(self, quadrature: Q2) -> DemandEstimatorBuilder<Q2> {
        DemandEstimatorBuilder {
            parameters:          self.parameters,
            quadrature,
            tie_policy:          self.tie_policy,
            partition_tolerance: self.partition_tolerance,
            num_threads:         self.num_threads,
        }
    }

    /// Use adaptive cubature with `config` (validated here).
    pub fn adaptive(self, config: QuadConfig) -> EstimateResult<DemandEstimatorBuilder<AdaptiveCubature>> {
        Ok(self.quadrature(AdaptiveCubature::new(config)?))
    }

    /// Use stratified Monte Carlo with `config` (validated here).
    pub fn monte_carlo(
        self,
        config: MonteCarloConfig,
    ) -> EstimateResult<DemandEstimatorBuilder<StratifiedMonteCarlo>> {
        Ok(self.quadrature(StratifiedMonteCarlo::new(config)?))
    }

    pub fn tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = policy;
        self
    }

    /// Slack allowed in the `Σ shares ≈ 1` check on top of the summed
    /// error estimates.
    pub fn partition_tolerance(mut self, tolerance: f64) -> Self {
        self.partition_tolerance = tolerance;
        self
    }

    /// Dedicated worker pool size for the `parallel` feature.
    pub fn num_threads(mut self, n: usize) -> Self {
        self.num_threads = Some(n);
        self
    }

    /// Validate inputs and return a ready-to-run [`DemandEstimator`].
    pub fn build(self) -> EstimateResult<DemandEstimator<Q>> {
        if !(self.partition_tolerance >= 0.0) || !self.partition_tolerance.is_finite() {
            return Err(EstimateError::Config(format!(
                "partition tolerance must be finite and >= 0, got {}",
                self.partition_tolerance
            )));
        }
        if self.num_threads == Some(0) {
            return Err(EstimateError::Config("num_threads must be at least 1".into()));
        }

        #[cfg(feature = "parallel")]
        let pool = match self.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| EstimateError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        Ok(DemandEstimator {
            parameters:          self.parameters,
            quadrature:          self.quadrature,
            tie_policy:          self.tie_policy,
            partition_tolerance: self.partition_tolerance,
            num_threads:         self.num_threads,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}

//! The `DemandEstimator` struct and its estimation pass.

use acq_choice::{OptionIndicator, TiePolicy};
use acq_core::{Acquisition, DemandResult, Parameters, Point, Rect};
use acq_quad::{Integral, Quadrature};
use tracing::{debug, info, warn};

use crate::{DemandReport, EstimateObserver, EstimateResult};

/// Estimates the population share of each acquisition option.
///
/// Holds only immutable configuration; every call to
/// [`estimate`][Self::estimate] is an independent one-shot computation.
///
/// Create via [`DemandEstimatorBuilder`][crate::DemandEstimatorBuilder].
pub struct DemandEstimator<Q: Quadrature> {
    /// Model parameters for [`estimate`][Self::estimate].
    pub parameters: Parameters,

    /// Integration method, shared by the three per-option integrations.
    pub quadrature: Q,

    /// How exact utility ties are attributed.
    pub tie_policy: TiePolicy,

    /// Slack added to the summed error estimates when checking that the
    /// shares sum to 1.  A violation is logged, not returned as an error.
    pub partition_tolerance: f64,

    /// Worker thread count for the `parallel` feature.  `None` uses the
    /// global Rayon pool.  Ignored without the feature.
    pub num_threads: Option<usize>,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<Q: Quadrature> DemandEstimator<Q> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Estimate all three shares for the configured parameters.
    pub fn estimate<O: EstimateObserver>(&self, observer: &mut O) -> DemandReport {
        self.estimate_for(&self.parameters, observer)
    }

    /// Estimate all three shares for `params` using this estimator's
    /// quadrature and tie policy.
    pub fn estimate_for<O: EstimateObserver>(
        &self,
        params:   &Parameters,
        observer: &mut O,
    ) -> DemandReport {
        info!(params = %params, method = self.quadrature.name(), "estimating demand shares");

        let integrals = self.compute_integrals(params, observer);
        for option in Acquisition::ALL {
            let integral = &integrals[option.index()];
            let result = DemandResult::new(integral.estimate, integral.error);
            observer.on_option_end(option, &result, integral);
        }

        let report = DemandReport::new(*params, self.tie_policy, self.quadrature.name(), integrals);

        for warning in &report.warnings {
            warn!(
                option = %warning.option,
                error = warning.achieved_error,
                target = warning.tolerance,
                evaluations = warning.evaluations,
                "quadrature did not converge; keeping best estimate"
            );
            observer.on_warning(warning);
        }

        if !report.within_partition_tolerance(self.partition_tolerance) {
            warn!(
                total = report.total_share(),
                gap = report.partition_gap(),
                total_error = report.total_error(),
                "demand shares do not sum to 1 within error estimates"
            );
        }

        let [new, used, sub] = report.shares();
        info!(new, used, sub, evaluations = report.evaluations(), "demand shares estimated");

        observer.on_finish(&report);
        report
    }

    /// Integrate a single option's indicator over the unit square.
    pub fn estimate_option(&self, params: &Parameters, option: Acquisition) -> Integral {
        let indicator = OptionIndicator::new(option, *params, self.tie_policy);
        let integrand = move |p: Point| indicator.eval(p);
        let integral = self.quadrature.integrate(&integrand, Rect::UNIT);
        debug!(
            option = %option,
            share = integral.estimate,
            error = integral.error,
            evaluations = integral.evaluations,
            regions = integral.regions,
            "option integrated"
        );
        integral
    }

    /// Estimate once per new-good price in `prices`, holding every other
    /// parameter fixed.  Fails on the first invalid price.
    pub fn sweep_p_new<O: EstimateObserver>(
        &self,
        prices:   &[f64],
        observer: &mut O,
    ) -> EstimateResult<Vec<DemandReport>> {
        prices
            .iter()
            .map(|&p_new| {
                let params = self.parameters.with_p_new(p_new)?;
                Ok(self.estimate_for(&params, observer))
            })
            .collect()
    }

    // ── Integration phase ─────────────────────────────────────────────────

    /// Run the three independent integrations.
    ///
    /// With the `parallel` Cargo feature they run on Rayon's thread pool.
    fn compute_integrals<O: EstimateObserver>(
        &self,
        params:   &Parameters,
        observer: &mut O,
    ) -> [Integral; 3] {
        #[cfg(not(feature = "parallel"))]
        {
            Acquisition::ALL.map(|option| {
                observer.on_option_start(option);
                self.estimate_option(params, option)
            })
        }

        #[cfg(feature = "parallel")]
        {
            for option in Acquisition::ALL {
                observer.on_option_start(option);
            }

            let run = || {
                let (new, (used, sub)) = rayon::join(
                    || self.estimate_option(params, Acquisition::New),
                    || {
                        rayon::join(
                            || self.estimate_option(params, Acquisition::Used),
                            || self.estimate_option(params, Acquisition::Subscribe),
                        )
                    },
                );
                [new, used, sub]
            };

            match &self.pool {
                Some(pool) => pool.install(run),
                None       => run(),
            }
        }
    }
}

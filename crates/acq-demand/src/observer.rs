//! Estimator observer trait for progress reporting and output.

use acq_core::{Acquisition, DemandResult};
use acq_quad::Integral;

use crate::{ConvergenceWarning, DemandReport};

/// Callbacks invoked by [`DemandEstimator::estimate`][crate::DemandEstimator::estimate]
/// at key points of an estimation pass.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Ordering
///
/// `on_option_end` always fires in `Acquisition::ALL` order.  Without the
/// `parallel` feature each `on_option_start` immediately precedes its
/// integration; with it, all three starts fire before the integrations run.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl EstimateObserver for Progress {
///     fn on_option_end(&mut self, option: Acquisition, result: &DemandResult, _: &Integral) {
///         eprintln!("{option}: {:.6} ± {:.1e}", result.share, result.error_estimate);
///     }
/// }
/// ```
pub trait EstimateObserver {
    /// Called before the integration for `option` begins.
    fn on_option_start(&mut self, _option: Acquisition) {}

    /// Called with the finished share and the raw quadrature output.
    fn on_option_end(
        &mut self,
        _option:   Acquisition,
        _result:   &DemandResult,
        _integral: &Integral,
    ) {}

    /// Called once per integration that missed its error target.
    fn on_warning(&mut self, _warning: &ConvergenceWarning) {}

    /// Called once with the complete report.
    fn on_finish(&mut self, _report: &DemandReport) {}
}

/// An [`EstimateObserver`] that does nothing.
pub struct NoopObserver;

impl EstimateObserver for NoopObserver {}

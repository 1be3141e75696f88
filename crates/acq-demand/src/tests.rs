//! Integration tests for acq-demand.

use acq_choice::TiePolicy;
use acq_core::{Acquisition, DemandResult, Parameters};
use acq_quad::{Integral, QuadConfig, REGION_EVALS};

use crate::{
    ConvergenceWarning, DemandEstimator, DemandEstimatorBuilder, DemandReport, EstimateObserver,
    NoopObserver,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> QuadConfig {
    QuadConfig { max_evals: 200_000, ..QuadConfig::default() }
}

fn estimator(params: Parameters) -> DemandEstimator<acq_quad::AdaptiveCubature> {
    DemandEstimatorBuilder::new(params)
        .adaptive(test_config())
        .unwrap()
        .build()
        .unwrap()
}

fn run(params: Parameters) -> DemandReport {
    estimator(params).estimate(&mut NoopObserver)
}

fn baseline() -> Parameters {
    Parameters::new(5, 0.3, 0.1, 0.05, 0.8).unwrap()
}

/// One period, boundary at w = 0.2: used wins left of it, subscription right.
fn vertical_split() -> Parameters {
    Parameters::new(1, 0.5, 0.2, 0.3, 0.5).unwrap()
}

#[derive(Debug, PartialEq)]
enum Event {
    Start(Acquisition),
    End(Acquisition),
    Warning(Acquisition),
    Finish,
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl EstimateObserver for Recorder {
    fn on_option_start(&mut self, option: Acquisition) {
        self.events.push(Event::Start(option));
    }

    fn on_option_end(&mut self, option: Acquisition, _r: &DemandResult, _i: &Integral) {
        self.events.push(Event::End(option));
    }

    fn on_warning(&mut self, warning: &ConvergenceWarning) {
        self.events.push(Event::Warning(warning.option));
    }

    fn on_finish(&mut self, _report: &DemandReport) {
        self.events.push(Event::Finish);
    }
}

// ── Partition and scenarios ───────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn shares_partition_the_square() {
        let cases = [
            baseline(),
            vertical_split(),
            Parameters::new(3, 0.5, 0.2, 0.1, 0.6).unwrap(),
            Parameters::new(10, 1.5, 0.6, 0.2, 0.7).unwrap(),
            Parameters::new(2, 0.1, 0.05, 0.3, 0.9).unwrap(),
        ];
        for params in cases {
            let report = run(params);
            assert!(
                report.within_partition_tolerance(1e-3),
                "{params}: total {} gap {} err {}",
                report.total_share(),
                report.partition_gap(),
                report.total_error()
            );
            for share in report.shares() {
                assert!((-1e-3..=1.0 + 1e-3).contains(&share), "{params}: share {share}");
            }
        }
    }

    #[test]
    fn new_share_never_rises_with_its_price() {
        let prices: Vec<f64> = (0..=10).map(|i| i as f64 * 0.1).collect();
        let params = Parameters::new(4, 0.0, 0.3, 0.15, 0.7).unwrap();
        let reports = estimator(params).sweep_p_new(&prices, &mut NoopObserver).unwrap();
        assert_eq!(reports.len(), prices.len());

        for pair in reports.windows(2) {
            let (a, b) = (pair[0].get(Acquisition::New), pair[1].get(Acquisition::New));
            assert!(
                b.share <= a.share + a.error_estimate + b.error_estimate + 1e-4,
                "pN {} → {}: {} → {}",
                pair[0].parameters.p_new(),
                pair[1].parameters.p_new(),
                a.share,
                b.share
            );
        }
        // Free new goods must take a real share; at pN = 1 none at all.
        assert!(reports[0].get(Acquisition::New).share > 0.1);
        assert_abs_diff_eq!(reports[10].get(Acquisition::New).share, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn free_subscription_dominates() {
        let report = run(Parameters::new(5, 0.3, 0.1, 0.0, 0.8).unwrap());
        assert_abs_diff_eq!(report.get(Acquisition::Subscribe).share, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.get(Acquisition::New).share, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.get(Acquisition::Used).share, 0.0, epsilon = 1e-9);
        assert!(report.converged());
    }

    #[test]
    fn single_period_scenario() {
        let report = run(Parameters::new(1, 0.3, 0.1, 0.05, 0.8).unwrap());
        let [new, used, sub] = report.shares();
        assert_abs_diff_eq!(sub, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(new, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(used, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn baseline_new_never_wins() {
        // pN − pSub·S ≥ 0.3 − 0.05·5 > 0: subscription always beats buying new.
        let report = run(baseline());
        assert_abs_diff_eq!(report.get(Acquisition::New).share, 0.0, epsilon = 1e-9);
        let used = report.get(Acquisition::Used).share;
        assert!(used > 0.0 && used < 0.2, "used share {used}");
    }

    #[test]
    fn vertical_boundary_is_located() {
        let report = run(vertical_split());
        assert_abs_diff_eq!(report.get(Acquisition::Used).share, 0.2, epsilon = 1e-4);
        assert_abs_diff_eq!(report.get(Acquisition::Subscribe).share, 0.8, epsilon = 1e-4);
        assert_abs_diff_eq!(report.get(Acquisition::New).share, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn thin_used_strip_is_found() {
        // One period: used (0.5·w) beats subscription (w − 0.002) iff
        // w ≤ 0.004, a strip no first-grid node reaches.
        let report = run(Parameters::new(1, 5.0, 0.0, 0.002, 0.5).unwrap());
        let [new, used, sub] = report.shares();
        assert!(used > 0.0);
        assert_abs_diff_eq!(used, 0.004, epsilon = 1e-4);
        assert_abs_diff_eq!(sub, 0.996, epsilon = 1e-4);
        assert_abs_diff_eq!(new, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn new_share_near_full_patience() {
        // New beats subscription only in a thin band just below r = 1.
        let report = run(Parameters::new(5, 0.2499, 0.1, 0.05, 0.8).unwrap());
        let new = report.get(Acquisition::New).share;
        assert!(new > 0.0);
        assert_abs_diff_eq!(new, 1.70e-4, epsilon = 1e-5);
        assert!(report.within_partition_tolerance(1e-3));
    }

    #[test]
    fn identical_used_and_new_with_priority() {
        let params = Parameters::new(5, 0.3, 0.3, 0.2, 1.0).unwrap();
        let report = DemandEstimatorBuilder::new(params)
            .adaptive(test_config())
            .unwrap()
            .tie_policy(TiePolicy::Priority)
            .build()
            .unwrap()
            .estimate(&mut NoopObserver);

        let [new, used, sub] = report.shares();
        assert_eq!(new, 0.0);
        assert!(used > 0.0);
        assert_abs_diff_eq!(used, 1.0 - sub, epsilon = report.total_error() + 1e-3);
        assert_eq!(report.tie_policy, TiePolicy::Priority);
    }

    #[test]
    fn identical_used_and_new_inclusive_double_counts() {
        let params = Parameters::new(5, 0.3, 0.3, 0.2, 1.0).unwrap();
        let report = run(params);
        let [new, used, _] = report.shares();
        // Same integrand, same deterministic partition: bit-identical shares.
        assert_eq!(new, used);
        assert!(new > 0.0);
        assert!(!report.within_partition_tolerance(1e-3));
    }
}

// ── Quadrature choice ─────────────────────────────────────────────────────────

#[cfg(test)]
mod method_tests {
    use acq_quad::MonteCarloConfig;
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn monte_carlo_agrees_with_adaptive() {
        let adaptive = run(baseline());
        let sampled = DemandEstimatorBuilder::new(baseline())
            .monte_carlo(MonteCarloConfig::default())
            .unwrap()
            .build()
            .unwrap()
            .estimate(&mut NoopObserver);

        assert_eq!(sampled.method, "stratified-monte-carlo");
        for option in Acquisition::ALL {
            assert_abs_diff_eq!(
                sampled.get(option).share,
                adaptive.get(option).share,
                epsilon = 1e-2
            );
        }
    }

    #[test]
    fn budget_exhaustion_becomes_warnings() {
        let estimator = DemandEstimatorBuilder::new(vertical_split())
            .adaptive(QuadConfig {
                abs_tol:           1e-12,
                rel_tol:           0.0,
                max_evals:         16 * REGION_EVALS + 2 * 2 * REGION_EVALS,
                initial_divisions: 4,
            })
            .unwrap()
            .build()
            .unwrap();
        let report = estimator.estimate(&mut NoopObserver);

        assert!(!report.converged());
        let warned: Vec<Acquisition> = report.warnings.iter().map(|w| w.option).collect();
        assert_eq!(warned, vec![Acquisition::Used, Acquisition::Subscribe]);
        for w in &report.warnings {
            assert!(w.achieved_error > w.tolerance);
            assert!(w.to_string().contains("did not") || w.to_string().contains("stopped"));
        }
        // Best-effort shares are still reported.
        assert_abs_diff_eq!(report.get(Acquisition::Used).share, 0.2, epsilon = 0.05);
    }

    #[test]
    fn single_option_integration() {
        let est = estimator(vertical_split());
        let integral = est.estimate_option(&vertical_split(), Acquisition::Used);
        assert_abs_diff_eq!(integral.estimate, 0.2, epsilon = 1e-4);
    }
}

// ── Observer and builder ──────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn hooks_fire_in_reporting_order() {
        let mut rec = Recorder::default();
        estimator(vertical_split()).estimate(&mut rec);

        let ends: Vec<&Event> = rec.events.iter().filter(|e| matches!(e, Event::End(_))).collect();
        assert_eq!(
            ends,
            vec![
                &Event::End(Acquisition::New),
                &Event::End(Acquisition::Used),
                &Event::End(Acquisition::Subscribe)
            ]
        );
        let starts = rec.events.iter().filter(|e| matches!(e, Event::Start(_))).count();
        assert_eq!(starts, 3);
        assert_eq!(rec.events.last(), Some(&Event::Finish));
        assert!(!rec.events.iter().any(|e| matches!(e, Event::Warning(_))));
    }

    #[test]
    fn warnings_reach_observer() {
        let estimator = DemandEstimatorBuilder::new(vertical_split())
            .adaptive(QuadConfig {
                abs_tol:           1e-12,
                rel_tol:           0.0,
                max_evals:         16 * REGION_EVALS,
                initial_divisions: 4,
            })
            .unwrap()
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        estimator.estimate(&mut rec);
        let warned = rec.events.iter().filter(|e| matches!(e, Event::Warning(_))).count();
        assert_eq!(warned, 2);
    }

    #[test]
    fn sweep_reports_each_price() {
        let mut rec = Recorder::default();
        let reports = estimator(vertical_split())
            .sweep_p_new(&[0.1, 0.2, 0.3], &mut rec)
            .unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[1].parameters.p_new(), 0.2);
        let finishes = rec.events.iter().filter(|e| **e == Event::Finish).count();
        assert_eq!(finishes, 3);
    }

    #[test]
    fn sweep_rejects_invalid_price() {
        let err = estimator(vertical_split())
            .sweep_p_new(&[0.1, -0.5], &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, crate::EstimateError::Parameters(_)));
        assert!(err.to_string().contains("p_new"));
    }

    #[test]
    fn builder_rejects_bad_settings() {
        let err = DemandEstimatorBuilder::new(baseline()).partition_tolerance(-1.0).build();
        assert!(matches!(err, Err(crate::EstimateError::Config(_))));

        let err = DemandEstimatorBuilder::new(baseline()).num_threads(0).build();
        assert!(matches!(err, Err(crate::EstimateError::Config(_))));

        let err = DemandEstimatorBuilder::new(baseline())
            .adaptive(QuadConfig { initial_divisions: 0, ..QuadConfig::default() });
        assert!(matches!(err, Err(crate::EstimateError::Quadrature(_))));
    }

    #[test]
    fn builder_defaults() {
        let est = DemandEstimatorBuilder::new(baseline()).build().unwrap();
        assert_eq!(est.tie_policy, TiePolicy::Inclusive);
        assert_eq!(est.partition_tolerance, 1e-3);
        assert_eq!(est.num_threads, None);
        assert_eq!(est.parameters, baseline());
    }
}

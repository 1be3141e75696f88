//! Unit tests for acq-quad.

use acq_core::{Point, Rect};

use crate::{
    AdaptiveCubature, MonteCarloConfig, QuadConfig, Quadrature, StratifiedMonteCarlo, REGION_EVALS,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// One region evaluation, no refinement.
fn single_shot() -> AdaptiveCubature {
    AdaptiveCubature::new(QuadConfig {
        abs_tol:           1.0,
        rel_tol:           0.0,
        max_evals:         REGION_EVALS,
        initial_divisions: 1,
    })
    .unwrap()
}

fn adaptive(max_evals: usize) -> AdaptiveCubature {
    AdaptiveCubature::new(QuadConfig { max_evals, ..QuadConfig::default() }).unwrap()
}

/// Quarter disk of radius 0.5 at the origin: area π/16.
fn quarter_disk(p: Point) -> f64 {
    if p.w * p.w + p.r * p.r <= 0.25 { 1.0 } else { 0.0 }
}

// ── Genz–Malik rule ───────────────────────────────────────────────────────────

#[cfg(test)]
mod rule_tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::genz_malik;

    #[test]
    fn exact_for_degree_seven_monomials() {
        let q = single_shot();
        let cases: [(i32, i32, f64); 5] = [
            (0, 0, 1.0),
            (3, 4, 1.0 / 20.0),
            (7, 0, 1.0 / 8.0),
            (2, 5, 1.0 / 18.0),
            (6, 1, 1.0 / 14.0),
        ];
        for (a, b, expected) in cases {
            let f = move |p: Point| p.w.powi(a) * p.r.powi(b);
            let out = q.integrate(&f, Rect::UNIT);
            assert_relative_eq!(out.estimate, expected, max_relative = 1e-13);
            assert_eq!(out.evaluations, REGION_EVALS);
        }
    }

    #[test]
    fn exact_on_offset_rectangle() {
        // ∫_0^2 ∫_0^1 w² r² dr dw = (8/3)(1/3)
        let f = |p: Point| p.w * p.w * p.r * p.r;
        let out = single_shot().integrate(&f, Rect::new(0.0, 2.0, 0.0, 1.0));
        assert_relative_eq!(out.estimate, 8.0 / 9.0, max_relative = 1e-13);
    }

    #[test]
    fn constant_has_no_error() {
        let rule = genz_malik::apply(&|_: Point| 2.0, Rect::UNIT);
        assert_relative_eq!(rule.estimate, 2.0, max_relative = 1e-14);
        assert!(rule.error < 1e-14);
    }

    #[test]
    fn splits_across_the_jump() {
        // Jump along w only: the w axis must be chosen.
        let step_w = |p: Point| if p.w < 0.4 { 1.0 } else { 0.0 };
        let rule = genz_malik::apply(&step_w, Rect::UNIT);
        assert_eq!(rule.split, acq_core::Axis::W);
        assert!(rule.error > 0.0);

        let step_r = |p: Point| if p.r < 0.4 { 1.0 } else { 0.0 };
        let rule = genz_malik::apply(&step_r, Rect::UNIT);
        assert_eq!(rule.split, acq_core::Axis::R);
    }

    #[test]
    fn strip_between_nodes_looks_flat() {
        // Every node lies at w > 0.02, so the rule sees a constant zero.
        let strip = |p: Point| if p.w < 0.01 { 1.0 } else { 0.0 };
        let rule = genz_malik::apply(&strip, Rect::UNIT);
        assert!(rule.flat);
        assert_eq!(rule.error, 0.0);
        assert_eq!(rule.center, 0.0);

        let rule = genz_malik::apply(&|p: Point| p.w, Rect::UNIT);
        assert!(!rule.flat);
    }

    #[test]
    fn flat_integrand_splits_widest_side() {
        let rule = genz_malik::apply(&|_: Point| 1.0, Rect::new(0.0, 1.0, 0.0, 3.0));
        assert_eq!(rule.split, acq_core::Axis::R);
    }
}

// ── Adaptive cubature ─────────────────────────────────────────────────────────

#[cfg(test)]
mod adaptive_tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn constant_converges_on_initial_grid() {
        let out = AdaptiveCubature::default().integrate(&|_: Point| 1.0, Rect::UNIT);
        assert_abs_diff_eq!(out.estimate, 1.0, epsilon = 1e-13);
        assert!(out.converged);
        assert_eq!(out.regions, 64);
        assert_eq!(out.evaluations, 64 * REGION_EVALS);
    }

    #[test]
    fn half_plane_indicator() {
        let f = |p: Point| if p.w < 0.3 { 1.0 } else { 0.0 };
        let out = adaptive(200_000).integrate(&f, Rect::UNIT);
        assert_abs_diff_eq!(out.estimate, 0.3, epsilon = out.error + 1e-4);
        assert!(out.regions > 64, "boundary cells must be refined");
    }

    #[test]
    fn thin_edge_strip_is_found() {
        // Narrower than the gap between the first-grid nodes and the w = 0 edge.
        let f = |p: Point| if p.w < 0.003 { 1.0 } else { 0.0 };
        let out = adaptive(200_000).integrate(&f, Rect::UNIT);
        assert!(out.estimate > 0.0);
        assert_abs_diff_eq!(out.estimate, 0.003, epsilon = 1e-5);
    }

    #[test]
    fn corner_jump_on_flat_cell_forces_refinement() {
        let f = |p: Point| if p.w < 0.003 { 1.0 } else { 0.0 };
        let q = AdaptiveCubature::new(QuadConfig {
            abs_tol:           1e-9,
            rel_tol:           0.0,
            max_evals:         REGION_EVALS,
            initial_divisions: 1,
        })
        .unwrap();
        let out = q.integrate(&f, Rect::UNIT);
        // Nodes all miss the strip; the corners at w = 0 report it.
        assert_eq!(out.estimate, 0.0);
        assert_eq!(out.error, 1.0);
        assert!(!out.converged);
    }

    #[test]
    fn curved_boundary_indicator() {
        let out = adaptive(200_000).integrate(&quarter_disk, Rect::UNIT);
        assert_abs_diff_eq!(out.estimate, std::f64::consts::PI / 16.0, epsilon = 1e-3);
        assert!(out.evaluations <= 200_000);
    }

    #[test]
    fn smooth_integrand_converges() {
        // ∫∫ e^(w+r) = (e - 1)²
        let f = |p: Point| (p.w + p.r).exp();
        let out = AdaptiveCubature::default().integrate(&f, Rect::UNIT);
        let exact = (std::f64::consts::E - 1.0).powi(2);
        assert!(out.converged);
        assert_abs_diff_eq!(out.estimate, exact, epsilon = 1e-8);
    }

    #[test]
    fn budget_exhaustion_is_reported() {
        let q = AdaptiveCubature::new(QuadConfig {
            abs_tol:           1e-15,
            rel_tol:           0.0,
            max_evals:         16 * REGION_EVALS + 3 * 2 * REGION_EVALS,
            initial_divisions: 4,
        })
        .unwrap();
        let f = |p: Point| (10.0 * p.w).sin() * (p.w * p.r).exp();
        let out = q.integrate(&f, Rect::UNIT);
        assert!(!out.converged);
        assert!(out.error > out.tolerance);
        assert_eq!(out.evaluations, 16 * REGION_EVALS + 3 * 2 * REGION_EVALS);
        assert_eq!(out.regions, 16 + 3);
    }

    #[test]
    fn tolerance_uses_larger_target() {
        let cfg = QuadConfig { abs_tol: 1e-6, rel_tol: 1e-3, ..QuadConfig::default() };
        assert_abs_diff_eq!(cfg.tolerance(10.0), 1e-2, epsilon = 1e-15);
        assert_eq!(cfg.tolerance(1e-6), 1e-6);
    }
}

// ── Monte Carlo ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod monte_carlo_tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn constant_is_exact() {
        let out = StratifiedMonteCarlo::default().integrate(&|_: Point| 1.0, Rect::UNIT);
        assert_abs_diff_eq!(out.estimate, 1.0, epsilon = 1e-12);
        assert_eq!(out.error, 0.0);
        assert!(out.converged);
        assert_eq!(out.evaluations, 64 * 64 * 4);
    }

    #[test]
    fn linear_integrand() {
        let out = StratifiedMonteCarlo::default().integrate(&|p: Point| p.w, Rect::UNIT);
        assert_abs_diff_eq!(out.estimate, 0.5, epsilon = 1e-3);
        assert!(out.error > 0.0);
    }

    #[test]
    fn deterministic_per_seed() {
        let a = StratifiedMonteCarlo::default().integrate(&quarter_disk, Rect::UNIT);
        let b = StratifiedMonteCarlo::default().integrate(&quarter_disk, Rect::UNIT);
        assert_eq!(a, b);

        let other = StratifiedMonteCarlo::new(MonteCarloConfig { seed: 99, ..Default::default() })
            .unwrap()
            .integrate(&quarter_disk, Rect::UNIT);
        assert_ne!(a.estimate, other.estimate);
    }

    #[test]
    fn agrees_with_adaptive() {
        let mc = StratifiedMonteCarlo::default().integrate(&quarter_disk, Rect::UNIT);
        let ad = adaptive(200_000).integrate(&quarter_disk, Rect::UNIT);
        assert_abs_diff_eq!(mc.estimate, ad.estimate, epsilon = 1e-2);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;
    use crate::QuadError;

    fn field(err: QuadError) -> &'static str {
        match err {
            QuadError::InvalidConfig { field, .. } => field,
        }
    }

    #[test]
    fn default_is_valid() {
        assert!(QuadConfig::default().validate().is_ok());
        assert!(MonteCarloConfig::default().validate().is_ok());
    }

    #[test]
    fn bad_tolerances_rejected() {
        let bad = QuadConfig { abs_tol: -1.0, ..QuadConfig::default() };
        assert_eq!(field(AdaptiveCubature::new(bad).unwrap_err()), "abs_tol");

        let bad = QuadConfig { rel_tol: f64::NAN, ..QuadConfig::default() };
        assert_eq!(field(bad.validate().unwrap_err()), "rel_tol");

        let bad = QuadConfig { abs_tol: 0.0, rel_tol: 0.0, ..QuadConfig::default() };
        assert_eq!(field(bad.validate().unwrap_err()), "abs_tol");
    }

    #[test]
    fn budget_must_cover_initial_grid() {
        let bad = QuadConfig { max_evals: 100, initial_divisions: 4, ..QuadConfig::default() };
        assert_eq!(field(bad.validate().unwrap_err()), "max_evals");

        let bad = QuadConfig { initial_divisions: 0, ..QuadConfig::default() };
        assert_eq!(field(bad.validate().unwrap_err()), "initial_divisions");
    }

    #[test]
    fn monte_carlo_settings_rejected() {
        let bad = MonteCarloConfig { samples_per_stratum: 1, ..Default::default() };
        assert_eq!(field(StratifiedMonteCarlo::new(bad).unwrap_err()), "samples_per_stratum");

        let bad = MonteCarloConfig { strata: 0, ..Default::default() };
        assert_eq!(field(bad.validate().unwrap_err()), "strata");

        let bad = MonteCarloConfig { z: 0.0, ..Default::default() };
        assert_eq!(field(bad.validate().unwrap_err()), "z");
    }
}

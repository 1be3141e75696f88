//! The `Quadrature` trait and its output.

use acq_core::{Point, Rect};

// ── Integrand ─────────────────────────────────────────────────────────────────

/// A real function on the `(w, r)` plane.
///
/// Implemented for every `Fn(Point) -> f64 + Sync`, so closures can be passed
/// directly.  `Sync` lets a quadrature share one integrand across threads.
pub trait Integrand: Sync {
    fn eval(&self, point: Point) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(Point) -> f64 + Sync,
{
    #[inline]
    fn eval(&self, point: Point) -> f64 {
        self(point)
    }
}

// ── Integral ──────────────────────────────────────────────────────────────────

/// Result of one integration.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Integral {
    /// Best estimate of the integral.
    pub estimate: f64,
    /// Absolute error estimate.  Indicative only: a discontinuous integrand
    /// can violate the smoothness the estimate assumes.
    pub error: f64,
    /// Integrand evaluations spent.
    pub evaluations: usize,
    /// Regions (or strata) in the final partition of the domain.
    pub regions: usize,
    /// The error the method was aiming for.  `f64::INFINITY` for methods
    /// without a target.
    pub tolerance: f64,
    /// `false` if the evaluation budget ran out before `error <= tolerance`.
    pub converged: bool,
}

// ── Quadrature ────────────────────────────────────────────────────────────────

/// Pluggable integration method.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one instance can drive several
/// independent integrations on Rayon worker threads.  `integrate` takes
/// `&self` and keeps all working state local to the call.
pub trait Quadrature: Send + Sync {
    /// Integrate `f` over `domain`.
    fn integrate(&self, f: &dyn Integrand, domain: Rect) -> Integral;

    /// Short method name for logs.
    fn name(&self) -> &'static str;
}

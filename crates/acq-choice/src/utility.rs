//! Discounted utility of each acquisition mode over `n` periods.
//!
//! Every mode pays a per-period flow discounted by `r^k` for `k = 0..n`:
//!
//! ```text
//! S(r, n)   = Σ_{k=0}^{n-1} r^k = (1 - r^n) / (1 - r)
//! U_new     = w·S - pN
//! U_used    = aU·w·S - pU
//! U_sub     = (w - pSub)·S
//! ```
//!
//! `S` is 0/0 at `r = 1`.  Within [`LIMIT_EPSILON`] of 1 the analytic limit
//! `S = n` is used instead.  Just outside that band the textbook quotient
//! loses most of its digits to cancellation in `1 - r^n`, so it is evaluated
//! as `-expm1(n·ln(1 - d)) / d` with `d = 1 - r` (exact for `r ∈ [½, 1]`).

use acq_core::{Acquisition, Parameters, Point};

/// Distance from `r = 1` below which the `r → 1` limit is used.
pub const LIMIT_EPSILON: f64 = 1e-12;

/// The finite geometric series `Σ_{k=0}^{n-1} r^k`.
#[inline]
pub fn geometric_factor(r: f64, n: u32) -> f64 {
    if (r - 1.0).abs() < LIMIT_EPSILON {
        return n as f64;
    }
    let d = 1.0 - r;
    // ln_1p(-1) = -inf at r = 0, and expm1(-inf) = -1, giving S = 1.
    -(n as f64 * (-d).ln_1p()).exp_m1() / d
}

/// Utility of buying new: `w·S - pN`.
#[inline]
pub fn utility_new(w: f64, r: f64, n: u32, p_new: f64) -> f64 {
    w * geometric_factor(r, n) - p_new
}

/// Utility of buying used: `aU·w·S - pU`.
#[inline]
pub fn utility_used(w: f64, r: f64, n: u32, p_used: f64, a_used: f64) -> f64 {
    a_used * w * geometric_factor(r, n) - p_used
}

/// Utility of subscribing: `(w - pSub)·S`.
#[inline]
pub fn utility_sub(w: f64, r: f64, n: u32, p_sub: f64) -> f64 {
    (w - p_sub) * geometric_factor(r, n)
}

// ── UtilityTriple ─────────────────────────────────────────────────────────────

/// The three discounted utilities at one point.
///
/// Computed fresh for every quadrature node; never cached.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct UtilityTriple {
    pub new:  f64,
    pub used: f64,
    pub sub:  f64,
}

impl UtilityTriple {
    /// Evaluate all three utilities, sharing one geometric-series factor.
    pub fn evaluate(point: Point, params: &Parameters) -> Self {
        let Point { w, r } = point;
        let s = geometric_factor(r, params.n());
        Self {
            new:  w * s - params.p_new(),
            used: params.a_used() * w * s - params.p_used(),
            sub:  (w - params.p_sub()) * s,
        }
    }

    /// Utility of `option`.
    #[inline]
    pub fn get(&self, option: Acquisition) -> f64 {
        match option {
            Acquisition::New       => self.new,
            Acquisition::Used      => self.used,
            Acquisition::Subscribe => self.sub,
        }
    }

    /// The two utilities competing with `option`.
    #[inline]
    pub fn rivals(&self, option: Acquisition) -> [f64; 2] {
        match option {
            Acquisition::New       => [self.used, self.sub],
            Acquisition::Used      => [self.new, self.sub],
            Acquisition::Subscribe => [self.new, self.used],
        }
    }
}

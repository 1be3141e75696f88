//! Globally adaptive cubature.
//!
//! # Algorithm
//!
//! ```text
//! regions ← Genz–Malik + corner check on each cell of an initial k×k grid
//! while Σ error > max(abs_tol, rel_tol·|Σ estimate|) and budget remains:
//!     pop the region with the largest error
//!     bisect it along its split axis
//!     push both halves (rule applied to each)
//! ```
//!
//! Regions are kept in a max-heap keyed by local error, so effort goes where
//! the integrand jumps.  For a 0/1 indicator that is exactly the cells
//! crossed by the decision boundary; cells wholly on one side are integrated
//! exactly by the first rule application and never touched again.
//!
//! A jump that passes between the 17 rule nodes leaves them all equal, and
//! the rule reports zero error.  Each region therefore also evaluates its
//! four corners: if the nodes are flat but a corner disagrees, the region's
//! error is the jump times its area and it is split across the disagreeing
//! pair.  Winning regions of the demand model are anchored at a corner or
//! edge of the square, so a thin strip along an edge is always caught.  The
//! initial grid bounds the size of an interior region that could still slip
//! past both checks.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use acq_core::{Axis, Rect};
use tracing::debug;

use crate::genz_malik::{self, RULE_NODES};
use crate::{Integral, Integrand, QuadError, QuadResult, Quadrature};

// ── QuadConfig ────────────────────────────────────────────────────────────────

/// Tolerances and budget for [`AdaptiveCubature`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadConfig {
    /// Absolute error target.
    pub abs_tol: f64,
    /// Relative error target (fraction of `|estimate|`).
    pub rel_tol: f64,
    /// Maximum integrand evaluations per integration.
    pub max_evals: usize,
    /// The domain is first cut into `initial_divisions²` equal cells.
    pub initial_divisions: usize,
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            abs_tol:           1e-6,
            rel_tol:           1e-6,
            max_evals:         4_000_000,
            initial_divisions: 8,
        }
    }
}

impl QuadConfig {
    /// Check every field, naming the first bad one.
    pub fn validate(&self) -> QuadResult<()> {
        if !(self.abs_tol >= 0.0) || !self.abs_tol.is_finite() {
            return Err(invalid("abs_tol", format!("must be finite and >= 0, got {}", self.abs_tol)));
        }
        if !(self.rel_tol >= 0.0) || !self.rel_tol.is_finite() {
            return Err(invalid("rel_tol", format!("must be finite and >= 0, got {}", self.rel_tol)));
        }
        if self.abs_tol == 0.0 && self.rel_tol == 0.0 {
            return Err(invalid("abs_tol", "abs_tol and rel_tol cannot both be zero".into()));
        }
        if self.initial_divisions == 0 {
            return Err(invalid("initial_divisions", "must be at least 1".into()));
        }
        let initial = self.initial_divisions * self.initial_divisions * REGION_EVALS;
        if self.max_evals < initial {
            return Err(invalid(
                "max_evals",
                format!("{} is below the {initial} evaluations of the initial grid", self.max_evals),
            ));
        }
        Ok(())
    }

    /// Error target for a given estimate.
    #[inline]
    pub fn tolerance(&self, estimate: f64) -> f64 {
        self.abs_tol.max(self.rel_tol * estimate.abs())
    }
}

/// Integrand evaluations per region: the rule nodes plus the four corners.
pub const REGION_EVALS: usize = RULE_NODES + 4;

fn invalid(field: &'static str, reason: String) -> QuadError {
    QuadError::InvalidConfig { field, reason }
}

// ── Region ────────────────────────────────────────────────────────────────────

/// A rectangle together with its rule estimate, ordered by error.
#[derive(Copy, Clone, Debug)]
struct Region {
    rect:     Rect,
    estimate: f64,
    error:    f64,
    split:    Axis,
}

impl Region {
    fn evaluate(f: &dyn Integrand, rect: Rect) -> Self {
        let rule = genz_malik::apply(f, rect);
        let mut region = Region { rect, estimate: rule.estimate, error: rule.error, split: rule.split };

        let [c00, c10, c01, c11] = rect.corners().map(|p| f.eval(p));
        if rule.flat {
            let jump = [c00, c10, c01, c11]
                .iter()
                .map(|c| (c - rule.center).abs())
                .fold(0.0, f64::max);
            if jump > 0.0 {
                region.error = jump * rect.area();
                region.split = if c00 != c10 || c01 != c11 { Axis::W } else { Axis::R };
            }
        }
        region
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Region {}

impl PartialOrd for Region {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Region {
    fn cmp(&self, other: &Self) -> Ordering {
        self.error.total_cmp(&other.error)
    }
}

fn totals(heap: &BinaryHeap<Region>) -> (f64, f64) {
    heap.iter().fold((0.0, 0.0), |(est, err), r| (est + r.estimate, err + r.error))
}

// ── AdaptiveCubature ──────────────────────────────────────────────────────────

/// Globally adaptive Genz–Malik cubature on rectangles.
#[derive(Clone, Debug, Default)]
pub struct AdaptiveCubature {
    config: QuadConfig,
}

impl AdaptiveCubature {
    /// Validate `config` and build the integrator.
    pub fn new(config: QuadConfig) -> QuadResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &QuadConfig {
        &self.config
    }
}

impl Quadrature for AdaptiveCubature {
    fn integrate(&self, f: &dyn Integrand, domain: Rect) -> Integral {
        let cfg = &self.config;

        let mut heap: BinaryHeap<Region> = domain
            .grid(cfg.initial_divisions)
            .into_iter()
            .map(|cell| Region::evaluate(f, cell))
            .collect();
        let mut evaluations = heap.len() * REGION_EVALS;
        let (mut estimate, mut error) = totals(&heap);

        while error > cfg.tolerance(estimate) && evaluations + 2 * REGION_EVALS <= cfg.max_evals {
            let Some(worst) = heap.pop() else { break };
            let (lo, hi) = worst.rect.bisect(worst.split);
            let lo = Region::evaluate(f, lo);
            let hi = Region::evaluate(f, hi);
            evaluations += 2 * REGION_EVALS;

            estimate += lo.estimate + hi.estimate - worst.estimate;
            error += lo.error + hi.error - worst.error;
            heap.push(lo);
            heap.push(hi);
        }

        // Re-sum from scratch: the running totals drift over many updates.
        let (estimate, error) = totals(&heap);
        let tolerance = cfg.tolerance(estimate);
        let converged = error <= tolerance;

        debug!(
            evaluations,
            regions = heap.len(),
            estimate,
            error,
            converged,
            "adaptive cubature finished"
        );

        Integral {
            estimate,
            error,
            evaluations,
            regions: heap.len(),
            tolerance,
            converged,
        }
    }

    fn name(&self) -> &'static str {
        "adaptive-cubature"
    }
}

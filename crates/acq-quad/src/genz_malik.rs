//! Genz–Malik embedded cubature rule specialised to two dimensions.
//!
//! One application evaluates the integrand at 17 nodes placed symmetrically
//! around the rectangle's center (offsets are fractions of the half-widths):
//!
//! ```text
//!   1 center
//!   4 axis nodes at ±λ2        (λ2 = √(9/70))
//!   4 axis nodes at ±λ4        (λ4 = √(9/10))
//!   4 diagonal nodes at (±λ4, ±λ4)
//!   4 diagonal nodes at (±λ5, ±λ5)   (λ5 = √(9/19))
//! ```
//!
//! The same nodes give a degree-7 estimate and an embedded degree-5 estimate;
//! their difference is the local error.  The fourth divided difference of
//! the axis nodes picks the split axis: the integrand varies most along the
//! axis where it is largest.

use acq_core::{Axis, Point, Rect};

use crate::Integrand;

/// Integrand evaluations per rule application.
pub const RULE_NODES: usize = 17;

const LAMBDA2: f64 = 0.358_568_582_800_318_1; // √(9/70)
const LAMBDA4: f64 = 0.948_683_298_050_513_8; // √(9/10)
const LAMBDA5: f64 = 0.688_247_201_611_685_3; // √(9/19)

// Degree-7 weights for n = 2, normalised so they sum to 1 over all nodes.
const W1: f64 = -3816.0 / 19683.0;
const W2: f64 = 980.0 / 6561.0;
const W3: f64 = 1020.0 / 19683.0;
const W4: f64 = 200.0 / 19683.0;
const W5: f64 = 6859.0 / 78732.0;

// Embedded degree-5 weights (no λ5 nodes).
const E1: f64 = -971.0 / 729.0;
const E2: f64 = 245.0 / 486.0;
const E3: f64 = 65.0 / 1458.0;
const E4: f64 = 25.0 / 729.0;

/// (λ2 / λ4)², scales the λ4 second difference onto the λ2 one.
const DIFF_RATIO: f64 = 1.0 / 7.0;

/// Outcome of one rule application on one rectangle.
#[derive(Copy, Clone, Debug)]
pub struct RuleEstimate {
    /// Degree-7 estimate.
    pub estimate: f64,
    /// `|degree-7 − degree-5|`.
    pub error: f64,
    /// Axis to bisect along if this rectangle needs refinement.
    pub split: Axis,
    /// Integrand value at the center.
    pub center: f64,
    /// `true` if all 17 nodes returned the same value.  The rule then sees
    /// a constant and reports zero error whatever happens between nodes.
    pub flat: bool,
}

/// Apply the rule to `f` on `rect`.
pub fn apply(f: &dyn Integrand, rect: Rect) -> RuleEstimate {
    let c = rect.center();
    let (hw, hr) = rect.half_widths();
    let f0 = f.eval(c);
    let (mut lo, mut hi) = (f0, f0);
    let mut at = |dw: f64, dr: f64| {
        let v = f.eval(Point::new(c.w + dw * hw, c.r + dr * hr));
        lo = lo.min(v);
        hi = hi.max(v);
        v
    };

    let w2 = at(LAMBDA2, 0.0) + at(-LAMBDA2, 0.0);
    let r2 = at(0.0, LAMBDA2) + at(0.0, -LAMBDA2);
    let w4 = at(LAMBDA4, 0.0) + at(-LAMBDA4, 0.0);
    let r4 = at(0.0, LAMBDA4) + at(0.0, -LAMBDA4);

    let sum2 = w2 + r2;
    let sum3 = w4 + r4;
    let sum4 = at(LAMBDA4, LAMBDA4)
        + at(LAMBDA4, -LAMBDA4)
        + at(-LAMBDA4, LAMBDA4)
        + at(-LAMBDA4, -LAMBDA4);
    let sum5 = at(LAMBDA5, LAMBDA5)
        + at(LAMBDA5, -LAMBDA5)
        + at(-LAMBDA5, LAMBDA5)
        + at(-LAMBDA5, -LAMBDA5);

    let flat = lo == hi;

    let area = rect.area();
    let deg7 = area * (W1 * f0 + W2 * sum2 + W3 * sum3 + W4 * sum4 + W5 * sum5);
    let deg5 = area * (E1 * f0 + E2 * sum2 + E3 * sum3 + E4 * sum4);

    let diff_w = ((w2 - 2.0 * f0) - DIFF_RATIO * (w4 - 2.0 * f0)).abs();
    let diff_r = ((r2 - 2.0 * f0) - DIFF_RATIO * (r4 - 2.0 * f0)).abs();
    let split = if (diff_w - diff_r).abs() <= 1e-12 * (diff_w + diff_r) {
        // Includes the flat case (both zero): fall back to the longer side.
        rect.widest_axis()
    } else if diff_w > diff_r {
        Axis::W
    } else {
        Axis::R
    };

    RuleEstimate { estimate: deg7, error: (deg7 - deg5).abs(), split, center: f0, flat }
}

//! Points and rectangles in the `(w, r)` consumer-type plane.
//!
//! `w` (per-period utility weight) is the first coordinate and `r` (discount
//! factor) the second.  The population is uniform on [`Rect::UNIT`], so the
//! area of a subset equals its population share.

// ── Point ─────────────────────────────────────────────────────────────────────

/// A consumer type `(w, r)`.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Per-period utility weight.
    pub w: f64,
    /// Geometric discount factor.
    pub r: f64,
}

impl Point {
    #[inline]
    pub const fn new(w: f64, r: f64) -> Self {
        Self { w, r }
    }
}

// ── Axis ──────────────────────────────────────────────────────────────────────

/// One of the two coordinate axes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    W,
    R,
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle `[w0, w1] × [r0, r1]`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub w0: f64,
    pub w1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl Rect {
    /// The unit square `[0, 1] × [0, 1]`.
    pub const UNIT: Rect = Rect { w0: 0.0, w1: 1.0, r0: 0.0, r1: 1.0 };

    pub const fn new(w0: f64, w1: f64, r0: f64, r1: f64) -> Self {
        Self { w0, w1, r0, r1 }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.w1 - self.w0
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.r1 - self.r0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.w0 + self.w1), 0.5 * (self.r0 + self.r1))
    }

    /// Half-widths along `w` and `r`.
    #[inline]
    pub fn half_widths(&self) -> (f64, f64) {
        (0.5 * self.width(), 0.5 * self.height())
    }

    /// The four corners: `(w0, r0)`, `(w1, r0)`, `(w0, r1)`, `(w1, r1)`.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.w0, self.r0),
            Point::new(self.w1, self.r0),
            Point::new(self.w0, self.r1),
            Point::new(self.w1, self.r1),
        ]
    }

    /// Map fractional coordinates `(u, v) ∈ [0, 1]²` into this rectangle.
    #[inline]
    pub fn lerp(&self, u: f64, v: f64) -> Point {
        Point::new(self.w0 + u * self.width(), self.r0 + v * self.height())
    }

    /// The longer axis; `W` on ties.
    pub fn widest_axis(&self) -> Axis {
        if self.height() > self.width() { Axis::R } else { Axis::W }
    }

    /// Bisect along `axis`, returning the lower half first.
    pub fn bisect(&self, axis: Axis) -> (Rect, Rect) {
        match axis {
            Axis::W => {
                let mid = 0.5 * (self.w0 + self.w1);
                (
                    Rect::new(self.w0, mid, self.r0, self.r1),
                    Rect::new(mid, self.w1, self.r0, self.r1),
                )
            }
            Axis::R => {
                let mid = 0.5 * (self.r0 + self.r1);
                (
                    Rect::new(self.w0, self.w1, self.r0, mid),
                    Rect::new(self.w0, self.w1, mid, self.r1),
                )
            }
        }
    }

    /// Split into a `k × k` grid of equal cells, row-major in `r`.
    ///
    /// `k = 0` is treated as `k = 1`.
    pub fn grid(&self, k: usize) -> Vec<Rect> {
        let k = k.max(1);
        let dw = self.width() / k as f64;
        let dr = self.height() / k as f64;
        let mut cells = Vec::with_capacity(k * k);
        for j in 0..k {
            for i in 0..k {
                // Snap the last cell to the outer edge so the grid tiles exactly.
                let w1 = if i + 1 == k { self.w1 } else { self.w0 + (i + 1) as f64 * dw };
                let r1 = if j + 1 == k { self.r1 } else { self.r0 + (j + 1) as f64 * dr };
                cells.push(Rect::new(
                    self.w0 + i as f64 * dw,
                    w1,
                    self.r0 + j as f64 * dr,
                    r1,
                ));
            }
        }
        cells
    }
}

impl Default for Rect {
    fn default() -> Self {
        Rect::UNIT
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.w0, self.w1, self.r0, self.r1)
    }
}

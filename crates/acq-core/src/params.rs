//! Model parameters.
//!
//! # Design
//!
//! `Parameters` is the single configuration value threaded through every
//! utility evaluation.  It is validated once at construction and immutable
//! afterwards (private fields, read-only accessors), so the utility and
//! decision code never re-checks ranges at each quadrature node.
//!
//! `RawParameters` is the unvalidated mirror with public fields.  It is the
//! shape used for (de)serialization and for building parameter sets field by
//! field; [`Parameters::try_from`] turns it into a validated value.

use crate::{AcqError, AcqResult};

// ── RawParameters ─────────────────────────────────────────────────────────────

/// Unvalidated parameter record.
///
/// Convert with `Parameters::try_from(raw)` or [`RawParameters::validate`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawParameters {
    /// Number of periods.  Must be at least 1.
    pub n:      u32,
    /// One-time price of a new good.
    pub p_new:  f64,
    /// One-time price of a used good.
    pub p_used: f64,
    /// Per-period subscription price.
    pub p_sub:  f64,
    /// Utility discount applied to a used good, in `(0, 1]`.
    pub a_used: f64,
}

impl RawParameters {
    /// Validate every field and return the immutable [`Parameters`].
    pub fn validate(self) -> AcqResult<Parameters> {
        if self.n < 1 {
            return Err(AcqError::InvalidParameter {
                field:    "n",
                value:    self.n as f64,
                expected: "a period count of at least 1",
            });
        }
        check_price("p_new", self.p_new)?;
        check_price("p_used", self.p_used)?;
        check_price("p_sub", self.p_sub)?;
        if !(self.a_used > 0.0 && self.a_used <= 1.0) {
            return Err(AcqError::InvalidParameter {
                field:    "a_used",
                value:    self.a_used,
                expected: "a discount factor in (0, 1]",
            });
        }

        Ok(Parameters {
            n:      self.n,
            p_new:  self.p_new,
            p_used: self.p_used,
            p_sub:  self.p_sub,
            a_used: self.a_used,
        })
    }
}

fn check_price(field: &'static str, value: f64) -> AcqResult<()> {
    // `!(value >= 0.0)` also rejects NaN.
    if !(value >= 0.0) || !value.is_finite() {
        return Err(AcqError::InvalidParameter {
            field,
            value,
            expected: "a finite non-negative price",
        });
    }
    Ok(())
}

// ── Parameters ────────────────────────────────────────────────────────────────

/// Validated, immutable model parameters.
///
/// | Field    | Range      | Meaning                                   |
/// |----------|------------|-------------------------------------------|
/// | `n`      | `≥ 1`      | number of periods                         |
/// | `p_new`  | `≥ 0`      | one-time price of a new good              |
/// | `p_used` | `≥ 0`      | one-time price of a used good             |
/// | `p_sub`  | `≥ 0`      | per-period subscription price             |
/// | `a_used` | `(0, 1]`   | utility discount for a used good          |
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParameters", into = "RawParameters"))]
pub struct Parameters {
    n:      u32,
    p_new:  f64,
    p_used: f64,
    p_sub:  f64,
    a_used: f64,
}

impl Parameters {
    /// Construct and validate in one step.
    ///
    /// Fails with [`AcqError::InvalidParameter`] naming the first offending
    /// field.
    pub fn new(n: u32, p_new: f64, p_used: f64, p_sub: f64, a_used: f64) -> AcqResult<Self> {
        RawParameters { n, p_new, p_used, p_sub, a_used }.validate()
    }

    #[inline]
    pub fn n(&self) -> u32 {
        self.n
    }

    #[inline]
    pub fn p_new(&self) -> f64 {
        self.p_new
    }

    #[inline]
    pub fn p_used(&self) -> f64 {
        self.p_used
    }

    #[inline]
    pub fn p_sub(&self) -> f64 {
        self.p_sub
    }

    #[inline]
    pub fn a_used(&self) -> f64 {
        self.a_used
    }

    /// A copy with a different new-good price.  Used by price sweeps.
    pub fn with_p_new(&self, p_new: f64) -> AcqResult<Self> {
        RawParameters { p_new, ..self.to_raw() }.validate()
    }

    /// The unvalidated mirror of these parameters.
    pub fn to_raw(&self) -> RawParameters {
        RawParameters {
            n:      self.n,
            p_new:  self.p_new,
            p_used: self.p_used,
            p_sub:  self.p_sub,
            a_used: self.a_used,
        }
    }
}

impl TryFrom<RawParameters> for Parameters {
    type Error = AcqError;

    fn try_from(raw: RawParameters) -> AcqResult<Self> {
        raw.validate()
    }
}

impl From<Parameters> for RawParameters {
    fn from(params: Parameters) -> Self {
        params.to_raw()
    }
}

impl std::fmt::Display for Parameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} pN={} pU={} pSub={} aU={}",
            self.n, self.p_new, self.p_used, self.p_sub, self.a_used
        )
    }
}

//! Per-option demand estimate.

/// Estimated population share for one acquisition option.
///
/// Produced once per integration and never mutated afterwards.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandResult {
    /// Estimated area of the region where the option wins.
    pub share: f64,
    /// Absolute error estimate reported by the quadrature.  Indicative, not a
    /// guaranteed bound.
    pub error_estimate: f64,
}

impl DemandResult {
    pub const fn new(share: f64, error_estimate: f64) -> Self {
        Self { share, error_estimate }
    }
}

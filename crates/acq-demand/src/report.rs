//! The outcome of one estimation pass.

use std::fmt;

use acq_choice::TiePolicy;
use acq_core::{Acquisition, DemandResult, Parameters};
use acq_quad::Integral;

// ── ConvergenceWarning ────────────────────────────────────────────────────────

/// An integration stopped on its evaluation budget before reaching its error
/// target.  The share it produced is still the best estimate available.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConvergenceWarning {
    pub option:         Acquisition,
    /// Error estimate at the point the budget ran out.
    pub achieved_error: f64,
    /// The error the quadrature was aiming for.
    pub tolerance:      f64,
    pub evaluations:    usize,
}

impl fmt::Display for ConvergenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: quadrature stopped after {} evaluations with error {:e} (target {:e})",
            self.option, self.evaluations, self.achieved_error, self.tolerance
        )
    }
}

// ── DemandReport ──────────────────────────────────────────────────────────────

/// Shares, error estimates, and diagnostics for all three options.
#[derive(Clone, Debug)]
pub struct DemandReport {
    /// Parameters the shares were computed for.
    pub parameters: Parameters,
    pub tie_policy: TiePolicy,
    /// Name of the quadrature that produced the integrals.
    pub method:     &'static str,
    /// One entry per integration that missed its target, in reporting order.
    pub warnings:   Vec<ConvergenceWarning>,
    integrals:      [Integral; 3],
}

impl DemandReport {
    /// Assemble a report from per-option integrals in `Acquisition::ALL`
    /// order, deriving warnings from their convergence flags.
    pub fn new(
        parameters: Parameters,
        tie_policy: TiePolicy,
        method:     &'static str,
        integrals:  [Integral; 3],
    ) -> Self {
        let warnings = Acquisition::ALL
            .into_iter()
            .zip(integrals.iter())
            .filter(|(_, i)| !i.converged)
            .map(|(option, i)| ConvergenceWarning {
                option,
                achieved_error: i.error,
                tolerance:      i.tolerance,
                evaluations:    i.evaluations,
            })
            .collect();

        Self { parameters, tie_policy, method, warnings, integrals }
    }

    /// Share and error estimate for `option`.
    pub fn get(&self, option: Acquisition) -> DemandResult {
        let i = &self.integrals[option.index()];
        DemandResult::new(i.estimate, i.error)
    }

    /// Raw quadrature output for `option`.
    pub fn integral(&self, option: Acquisition) -> &Integral {
        &self.integrals[option.index()]
    }

    /// `(DemandNew, DemandUsed, DemandSub)`.
    pub fn shares(&self) -> [f64; 3] {
        self.integrals.map(|i| i.estimate)
    }

    /// `(errN, errU, errS)`.
    pub fn errors(&self) -> [f64; 3] {
        self.integrals.map(|i| i.error)
    }

    pub fn total_share(&self) -> f64 {
        self.shares().iter().sum()
    }

    pub fn total_error(&self) -> f64 {
        self.errors().iter().sum()
    }

    /// `|Σ shares − 1|`.
    pub fn partition_gap(&self) -> f64 {
        (self.total_share() - 1.0).abs()
    }

    /// `true` if the shares sum to 1 within the summed error estimates plus
    /// `tolerance`.
    pub fn within_partition_tolerance(&self, tolerance: f64) -> bool {
        self.partition_gap() <= self.total_error() + tolerance
    }

    /// `true` if every integration met its error target.
    pub fn converged(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Integrand evaluations across all three integrations.
    pub fn evaluations(&self) -> usize {
        self.integrals.iter().map(|i| i.evaluations).sum()
    }
}

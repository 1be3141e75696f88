//! Utility-maximizing choice and the 0/1 indicators integrated downstream.
//!
//! An option "wins" at a point when its utility is `>=` both rivals'.  Exact
//! ties therefore count for every tied option.  Under continuous parameter
//! draws the tie locus has zero area, so this does not bias the shares; the
//! exception is a degenerate parameter set where two options have identical
//! utility everywhere (e.g. `aU = 1, pU = pN`).  [`TiePolicy::Priority`]
//! exists for that case.

use acq_core::{Acquisition, Parameters, Point};

use crate::UtilityTriple;

// ── TiePolicy ─────────────────────────────────────────────────────────────────

/// How exact utility ties are attributed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum TiePolicy {
    /// Every tied option counts as a winner (`>=` comparison).
    #[default]
    Inclusive,
    /// A tie goes to exactly one option, by the precedence
    /// `Subscribe > Used > New`.
    Priority,
}

/// Tie-break precedence for [`TiePolicy::Priority`], strongest first.
const PRECEDENCE: [Acquisition; 3] = [Acquisition::Subscribe, Acquisition::Used, Acquisition::New];

// ── Winners ───────────────────────────────────────────────────────────────────

/// The set of utility-maximizing options at one point.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Winners([bool; 3]);

impl Winners {
    /// All options whose utility is `>=` both rivals'.
    pub fn of(triple: &UtilityTriple) -> Self {
        let mut set = [false; 3];
        for option in Acquisition::ALL {
            let own = triple.get(option);
            set[option.index()] = triple.rivals(option).iter().all(|&rival| own >= rival);
        }
        Winners(set)
    }

    /// Apply `policy` to this set.  `Inclusive` is the identity.
    pub fn resolve(self, policy: TiePolicy) -> Self {
        match policy {
            TiePolicy::Inclusive => self,
            TiePolicy::Priority => {
                let mut set = [false; 3];
                if let Some(first) = PRECEDENCE.iter().find(|o| self.contains(**o)) {
                    set[first.index()] = true;
                }
                Winners(set)
            }
        }
    }

    #[inline]
    pub fn contains(&self, option: Acquisition) -> bool {
        self.0[option.index()]
    }

    /// Number of options in the set.  `> 1` means an exact tie.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Winning options in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = Acquisition> + '_ {
        Acquisition::ALL.into_iter().filter(|o| self.contains(*o))
    }
}

// ── Indicators ────────────────────────────────────────────────────────────────

/// 1.0 if `option` is utility-maximizing at `point` (ties included), else 0.0.
pub fn indicator(option: Acquisition, point: Point, params: &Parameters) -> f64 {
    let triple = UtilityTriple::evaluate(point, params);
    if Winners::of(&triple).contains(option) { 1.0 } else { 0.0 }
}

/// The integrand for one option: binds the option, the parameters, and the
/// tie policy into a value callable at any point.
///
/// Each option gets its own indicator so the three integrations stay fully
/// independent.
#[derive(Copy, Clone, Debug)]
pub struct OptionIndicator {
    pub option: Acquisition,
    pub params: Parameters,
    pub policy: TiePolicy,
}

impl OptionIndicator {
    pub fn new(option: Acquisition, params: Parameters, policy: TiePolicy) -> Self {
        Self { option, params, policy }
    }

    /// Evaluate the indicator at `point`.
    #[inline]
    pub fn eval(&self, point: Point) -> f64 {
        let triple = UtilityTriple::evaluate(point, &self.params);
        let winners = Winners::of(&triple).resolve(self.policy);
        if winners.contains(self.option) { 1.0 } else { 0.0 }
    }
}

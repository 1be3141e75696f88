//! `acq-choice`: consumer utility model and decision rule.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`utility`]  | `geometric_factor`, `utility_new/used/sub`, `UtilityTriple`   |
//! | [`decision`] | `TiePolicy`, `Winners`, `indicator`, `OptionIndicator`        |
//!
//! # Design notes
//!
//! Everything here is a pure function of a [`Point`][acq_core::Point] and an
//! explicit [`Parameters`][acq_core::Parameters] value.  There is no shared
//! state, so indicators can be evaluated from any number of quadrature
//! threads at once.

pub mod decision;
pub mod utility;


pub use decision::{OptionIndicator, TiePolicy, Winners, indicator};
pub use utility::{
    LIMIT_EPSILON, UtilityTriple, geometric_factor, utility_new, utility_sub, utility_used,
};

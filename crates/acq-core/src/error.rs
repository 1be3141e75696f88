//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `AcqError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `acq-core`.
#[derive(Debug, Error, PartialEq)]
pub enum AcqError {
    /// A model parameter lies outside its accepted range.
    #[error("invalid parameter `{field}` = {value}: expected {expected}")]
    InvalidParameter {
        field:    &'static str,
        value:    f64,
        expected: &'static str,
    },
}

/// Shorthand result type for `acq-core`.
pub type AcqResult<T> = Result<T, AcqError>;

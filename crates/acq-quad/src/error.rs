//! Quadrature-subsystem error type.

use thiserror::Error;

/// Errors produced by `acq-quad`.
///
/// Only configuration can fail.  Non-convergence is not an error; it is
/// reported through [`Integral::converged`][crate::Integral::converged].
#[derive(Debug, Error, PartialEq)]
pub enum QuadError {
    #[error("invalid quadrature setting `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type QuadResult<T> = Result<T, QuadError>;

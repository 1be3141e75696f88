//! `acq-demand`: demand-share estimation for the rust_acq framework.
//!
//! # Estimation pass
//!
//! ```text
//! for option in [New, Used, Subscribe]:
//!   ① Indicator: bind option + parameters + tie policy into a 0/1 integrand.
//!   ② Integrate: Quadrature::integrate over the unit square
//!                 (all three concurrently with the `parallel` feature).
//!   ③ Report:    DemandResult (share, error); a ConvergenceWarning if the
//!                 quadrature ran out of budget.
//! then check Σ shares ≈ 1 within Σ errors + partition tolerance.
//! ```
//!
//! The three integrations share nothing but the immutable parameters, so
//! their order is irrelevant; results are always reported in
//! `Acquisition::ALL` order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the three integrations on Rayon's thread pool.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use acq_core::Parameters;
//! use acq_demand::{DemandEstimatorBuilder, NoopObserver};
//!
//! let params = Parameters::new(5, 0.3, 0.1, 0.05, 0.8)?;
//! let estimator = DemandEstimatorBuilder::new(params).build()?;
//! let report = estimator.estimate(&mut NoopObserver);
//! println!("{:?}", report.shares());
//! ```

pub mod builder;
pub mod error;
pub mod estimator;
pub mod observer;
pub mod report;

#[cfg(test)]
mod tests;

pub use builder::DemandEstimatorBuilder;
pub use error::{EstimateError, EstimateResult};
pub use estimator::DemandEstimator;
pub use observer::{EstimateObserver, NoopObserver};
pub use report::{ConvergenceWarning, DemandReport};

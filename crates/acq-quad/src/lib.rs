//! `acq-quad`: numerical integration over rectangles in the `(w, r)` plane.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`quadrature`]  | `Quadrature` and `Integrand` traits, `Integral` output      |
//! | [`genz_malik`]  | 17-node embedded degree-7/5 rule on one rectangle           |
//! | [`adaptive`]    | `AdaptiveCubature`, `QuadConfig`, corner check              |
//! | [`monte_carlo`] | `StratifiedMonteCarlo`, `MonteCarloConfig`                  |
//! | [`error`]       | `QuadError`, `QuadResult<T>`                                |
//!
//! # Pluggability
//!
//! `acq-demand` integrates through the [`Quadrature`] trait, so the adaptive
//! rule and the sampling estimator are interchangeable.  Both return an
//! estimate together with an absolute error estimate; neither fails at run
//! time.  An integration that runs out of budget reports
//! `converged = false` and its best estimate.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the config types.       |

pub mod adaptive;
pub mod error;
pub mod genz_malik;
pub mod monte_carlo;
pub mod quadrature;

#[cfg(test)]
mod tests;

pub use adaptive::{AdaptiveCubature, QuadConfig, REGION_EVALS};
pub use error::{QuadError, QuadResult};
pub use monte_carlo::{MonteCarloConfig, StratifiedMonteCarlo};
pub use quadrature::{Integral, Integrand, Quadrature};

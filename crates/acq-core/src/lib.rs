//! `acq-core`: foundational types for the `rust_acq` demand-share estimator.
//!
//! This crate is a dependency of every other `acq-*` crate.  It intentionally
//! has no `acq-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`params`]    | `Parameters` (validated, immutable), `RawParameters`    |
//! | [`option`]    | `Acquisition` enum (`New`, `Used`, `Subscribe`)         |
//! | [`geom`]      | `Point`, `Rect`, `Axis`                                 |
//! | [`result`]    | `DemandResult`                                          |
//! | [`rng`]       | `SampleRng` (per-stratum deterministic RNG)             |
//! | [`error`]     | `AcqError`, `AcqResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types;       |
//! |         | `Parameters` is validated on deserialization.              |

pub mod error;
pub mod geom;
pub mod option;
pub mod params;
pub mod result;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AcqError, AcqResult};
pub use geom::{Axis, Point, Rect};
pub use option::Acquisition;
pub use params::{Parameters, RawParameters};
pub use result::DemandResult;
pub use rng::SampleRng;

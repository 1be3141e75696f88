//! `acq-output`: report writers for the rust_acq demand estimator.
//!
//! | Writer        | Format                                                  |
//! |---------------|---------------------------------------------------------|
//! | [`TextWriter`] | the two-line `Demand (New, Used, Sub) = …` report      |
//! | [`CsvWriter`]  | one row per report, for parameter sweeps               |
//!
//! Both implement [`ReportWriter`] over any `io::Write` and are driven by
//! [`ReportObserver`], which implements `acq_demand::EstimateObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use acq_output::{ReportObserver, TextWriter};
//!
//! let mut obs = ReportObserver::new(TextWriter::new(std::io::stdout()));
//! estimator.estimate(&mut obs);
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use row::ShareRow;
pub use text::TextWriter;
pub use writer::ReportWriter;

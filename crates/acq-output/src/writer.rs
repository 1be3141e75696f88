//! The `ReportWriter` trait implemented by all report formats.

use acq_demand::DemandReport;

use crate::OutputResult;

/// Trait implemented by the text and CSV writers.
///
/// Errors surface here; [`ReportObserver`][crate::ReportObserver] stores the
/// first one because observer hooks cannot return a `Result`.
pub trait ReportWriter {
    /// Write one finished report.
    fn write_report(&mut self, report: &DemandReport) -> OutputResult<()>;

    /// Flush the underlying sink.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

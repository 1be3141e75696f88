//! `ReportObserver<W>`: bridges `EstimateObserver` to a `ReportWriter`.

use acq_demand::{DemandReport, EstimateObserver};

use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// An [`EstimateObserver`] that writes every finished report to a
/// [`ReportWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After the estimate returns, call
/// [`finish`][Self::finish] to flush and surface the first error, or inspect
/// it with [`take_error`][Self::take_error].
pub struct ReportObserver<W: ReportWriter> {
    writer:     W,
    reports:    usize,
    last_error: Option<OutputError>,
}

impl<W: ReportWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, reports: 0, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of reports written successfully.
    pub fn reports(&self) -> usize {
        self.reports
    }

    /// Flush the writer, returning the first error seen during the run.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> EstimateObserver for ReportObserver<W> {
    fn on_finish(&mut self, report: &DemandReport) {
        let result = self.writer.write_report(report);
        if result.is_ok() {
            self.reports += 1;
        }
        self.store_err(result);
    }
}

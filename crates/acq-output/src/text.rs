//! Plain-text report, two lines per estimate:
//!
//! ```text
//! Demand (New, Used, Sub) =  0.0 0.0405667085 0.9594332914
//! Error estimates =  0.0 9.999e-7 9.999e-7
//! ```
//!
//! Values use `Debug` formatting, so whole numbers keep their `.0`.

use std::io::Write;

use acq_demand::DemandReport;

use crate::OutputResult;
use crate::writer::ReportWriter;

/// Writes the two-line share/error report to any `io::Write`.
pub struct TextWriter<W: Write> {
    out: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_report(&mut self, report: &DemandReport) -> OutputResult<()> {
        let [dn, du, ds] = report.shares();
        let [en, eu, es] = report.errors();
        writeln!(self.out, "Demand (New, Used, Sub) =  {dn:?} {du:?} {ds:?}")?;
        writeln!(self.out, "Error estimates =  {en:?} {eu:?} {es:?}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

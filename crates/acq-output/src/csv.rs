//! CSV report backend: a header row, then one [`ShareRow`] per report.

use std::io::Write;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{OutputResult, ShareRow};

/// Writes reports as CSV records.  The header is written on construction.
pub struct CsvWriter<W: Write> {
    records:  Writer<W>,
    finished: bool,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> OutputResult<Self> {
        let mut records = Writer::from_writer(out);
        records.write_record(ShareRow::HEADER)?;
        Ok(Self { records, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.records.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> ReportWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &acq_demand::DemandReport) -> OutputResult<()> {
        self.records.write_record(ShareRow::from(report).to_record())?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.records.flush()?;
        Ok(())
    }
}

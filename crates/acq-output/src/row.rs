//! Flat row form of a [`DemandReport`].

use acq_core::Acquisition;
use acq_demand::DemandReport;

/// One report flattened into CSV columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShareRow {
    pub n:          u32,
    pub p_new:      f64,
    pub p_used:     f64,
    pub p_sub:      f64,
    pub a_used:     f64,
    pub share_new:  f64,
    pub err_new:    f64,
    pub share_used: f64,
    pub err_used:   f64,
    pub share_sub:  f64,
    pub err_sub:    f64,
    pub converged:  bool,
}

impl ShareRow {
    /// Column names, in record order.
    pub const HEADER: [&'static str; 12] = [
        "n", "p_new", "p_used", "p_sub", "a_used",
        "share_new", "err_new", "share_used", "err_used", "share_sub", "err_sub",
        "converged",
    ];

    pub fn to_record(&self) -> [String; 12] {
        [
            self.n.to_string(),
            self.p_new.to_string(),
            self.p_used.to_string(),
            self.p_sub.to_string(),
            self.a_used.to_string(),
            self.share_new.to_string(),
            self.err_new.to_string(),
            self.share_used.to_string(),
            self.err_used.to_string(),
            self.share_sub.to_string(),
            self.err_sub.to_string(),
            (self.converged as u8).to_string(),
        ]
    }
}

impl From<&DemandReport> for ShareRow {
    fn from(report: &DemandReport) -> Self {
        let p = &report.parameters;
        let new = report.get(Acquisition::New);
        let used = report.get(Acquisition::Used);
        let sub = report.get(Acquisition::Subscribe);
        Self {
            n:          p.n(),
            p_new:      p.p_new(),
            p_used:     p.p_used(),
            p_sub:      p.p_sub(),
            a_used:     p.a_used(),
            share_new:  new.share,
            err_new:    new.error_estimate,
            share_used: used.share,
            err_used:   used.error_estimate,
            share_sub:  sub.share,
            err_sub:    sub.error_estimate,
            converged:  report.converged(),
        }
    }
}

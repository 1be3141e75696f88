//! baseline: demand shares for the reference parameter set.
//!
//! Prints the two-line report to stdout.  Progress and diagnostics go to
//! stderr through `tracing`; set `RUST_LOG=debug` for per-integration detail.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use acq_choice::TiePolicy;
use acq_core::{Acquisition, Parameters};
use acq_demand::{DemandEstimatorBuilder, NoopObserver};
use acq_output::{ReportObserver, TextWriter};
use acq_quad::{MonteCarloConfig, QuadConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const PERIODS: u32 = 5;
const P_NEW:   f64 = 0.3;
const P_USED:  f64 = 0.1;
const P_SUB:   f64 = 0.05;
const A_USED:  f64 = 0.8;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let params = Parameters::new(PERIODS, P_NEW, P_USED, P_SUB, A_USED)?;

    // 1. Adaptive cubature: the reported estimate.
    let estimator = DemandEstimatorBuilder::new(params)
        .adaptive(QuadConfig::default())?
        .tie_policy(TiePolicy::Inclusive)
        .build()?;

    let mut output = ReportObserver::new(TextWriter::new(io::stdout().lock()));
    let report = estimator.estimate(&mut output);
    output.finish()?;

    // 2. Stratified sampling as an independent cross-check.
    let sampled = DemandEstimatorBuilder::new(params)
        .monte_carlo(MonteCarloConfig::default())?
        .build()?
        .estimate(&mut NoopObserver);

    for option in Acquisition::ALL {
        let (a, m) = (report.get(option), sampled.get(option));
        info!(
            option = %option,
            adaptive = a.share,
            monte_carlo = m.share,
            difference = (a.share - m.share).abs(),
            half_width = m.error_estimate,
            "cross-check"
        );
    }

    Ok(())
}

//! price_sweep: demand shares as the new-good price varies.
//!
//! Holds the reference parameters fixed, steps `pN` from 0.0 to 1.0, and
//! writes one CSV row per step to stdout.

use std::io;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use acq_core::Parameters;
use acq_demand::DemandEstimatorBuilder;
use acq_output::{CsvWriter, ReportObserver};
use acq_quad::QuadConfig;

const PERIODS: u32 = 5;
const P_USED:  f64 = 0.1;
const P_SUB:   f64 = 0.05;
const A_USED:  f64 = 0.8;

const STEPS: usize = 10;
const P_MAX: f64   = 1.0;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Integer steps so the printed prices are exact decimals.
    let prices: Vec<f64> = (0..=STEPS).map(|i| P_MAX * i as f64 / STEPS as f64).collect();
    let params = Parameters::new(PERIODS, prices[0], P_USED, P_SUB, A_USED)?;

    let estimator = DemandEstimatorBuilder::new(params)
        .adaptive(QuadConfig::default())?
        .build()?;

    let mut output = ReportObserver::new(CsvWriter::new(io::stdout().lock())?);
    let reports = estimator.sweep_p_new(&prices, &mut output)?;
    output.finish()?;

    let unconverged = reports.iter().filter(|r| !r.converged()).count();
    if unconverged > 0 {
        warn!(unconverged, "some sweep points stopped on the evaluation budget");
    }
    info!(points = reports.len(), "price sweep complete");
    Ok(())
}

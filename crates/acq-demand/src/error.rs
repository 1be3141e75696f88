use acq_core::AcqError;
use acq_quad::QuadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("estimator configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Parameters(#[from] AcqError),

    #[error(transparent)]
    Quadrature(#[from] QuadError),

    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

pub type EstimateResult<T> = Result<T, EstimateError>;

//! Storage error types.

use report_model::ReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("no platform data directory available")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, StoreError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid report document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

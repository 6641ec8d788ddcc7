use domino_sdk::SdkError;
use thiserror::Error;

pub type CircleResult<T> = Result<T, CircleError>;

#[derive(Debug, Error)]
pub enum CircleError {
    #[error("{0}")]
    Sdk(#[from] SdkError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidInput(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FintrackError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("Invalid amount: {0}")]
    Amount(#[from] std::num::ParseFloatError),

    #[error("Upload task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, FintrackError>;

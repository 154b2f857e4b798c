use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Failures while loading site data or file content.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}을(를) 불러오지 못했습니다 (status {status})")]
    Status { path: String, status: u16 },
}

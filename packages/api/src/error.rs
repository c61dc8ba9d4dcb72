//! Errors from the project client and endpoint resolution.

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

use thiserror::Error;

/// Error type that captures failures at the remote API boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server returned status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        /// `message` field of the structured error body, when present.
        message: Option<String>,
    },
    #[error("Unexpected response: {0}")]
    Unexpected(String),
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status carried by the error, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|code| code.as_u16()),
            _ => None,
        }
    }
}

use reqwest::{Method, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status code {}", .status.as_u16())]
    Status {
        status: StatusCode,
        method: Method,
        path: String,
        body: String,
    },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RestError {
    /// HTTP status returned by the backend, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RestError::Status { status, .. } => Some(*status),
            RestError::Transport(e) => e.status(),
            RestError::InvalidUrl(_) | RestError::Decode(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RestError>;

use reqwest::StatusCode;

use common::prelude::MultiHashError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("HTTP status {0}: {1}")]
    HttpStatus(StatusCode, String),
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("Invalid identifier in response: {0}")]
    InvalidIdentifier(#[from] MultiHashError),
    #[error("Request cancelled")]
    Cancelled,
    #[error("Client has been closed")]
    Closed,
    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl ApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Status code of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus(status, _) => Some(*status),
            Self::Reqwest(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

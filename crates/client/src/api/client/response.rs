use std::future::Future;

use bytes::Bytes;
use reqwest::{Response, StatusCode};
use tokio_util::sync::CancellationToken;

use super::ApiError;

/// A successful response whose body has not been read yet.
///
/// Every read races against the token the call was issued with, so a
/// cancellation that fires while the body is streaming still surfaces
/// as [`ApiError::Cancelled`].
#[derive(Debug)]
pub struct RawResponse {
    response: Response,
    cancel: CancellationToken,
}

impl RawResponse {
    pub(crate) fn new(response: Response, cancel: CancellationToken) -> Self {
        Self { response, cancel }
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Read the whole body.
    pub async fn bytes(self) -> Result<Bytes, ApiError> {
        let Self { response, cancel } = self;
        guard(&cancel, response.bytes()).await
    }

    /// Read the whole body as UTF-8 text.
    pub async fn text(self) -> Result<String, ApiError> {
        let Self { response, cancel } = self;
        guard(&cancel, response.text()).await
    }

    /// Read the next chunk of the body, `None` once it is exhausted.
    pub async fn chunk(&mut self) -> Result<Option<Bytes>, ApiError> {
        guard(&self.cancel, self.response.chunk()).await
    }
}

/// Run `fut` unless `cancel` fires first.
pub(crate) async fn guard<T, F>(cancel: &CancellationToken, fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, reqwest::Error>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ApiError::Cancelled),
        result = fut => Ok(result?),
    }
}

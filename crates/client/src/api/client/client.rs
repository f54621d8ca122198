use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::error::ApiError;
use super::response::{guard, RawResponse};
use super::{ApiRequest, Call};
use crate::config::Config;
use crate::uri::{append_path, append_query};

/// Path of the RPC API below the daemon's base URL.
pub const API_PATH: &str = "api/v0";

/// Executes calls against one daemon.
///
/// Cloning is cheap and every clone shares the same transport, so
/// closing any clone closes them all.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    remote: Url,
    api_url: Url,
    // None once closed
    http: RwLock<Option<Client>>,
}

impl ApiClient {
    /// Build a client with its own connection pool.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self::with_http_client(&config.remote, client))
    }

    /// Build a client on top of a caller-owned `reqwest::Client`.
    ///
    /// Closing this client only drops our handle; the caller's pool
    /// stays usable.
    pub fn with_http_client(remote: &Url, client: Client) -> Self {
        Self {
            inner: Arc::new(Inner {
                remote: remote.clone(),
                api_url: append_path(remote, API_PATH),
                http: RwLock::new(Some(client)),
            }),
        }
    }

    /// Get the base URL of the daemon
    pub fn base_url(&self) -> &Url {
        &self.inner.remote
    }

    /// Get the `/api/v0` URL every call is composed from
    pub fn api_url(&self) -> &Url {
        &self.inner.api_url
    }

    /// Get the underlying HTTP client for custom requests
    pub fn http_client(&self) -> Result<Client, ApiError> {
        self.inner.http.read().clone().ok_or(ApiError::Closed)
    }

    /// Release our handle on the transport. Every later call, through
    /// this client or any command group sharing it, fails with
    /// [`ApiError::Closed`].
    pub fn close(&self) {
        if self.inner.http.write().take().is_some() {
            tracing::debug!(remote = %self.inner.remote, "api client closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.http.read().is_none()
    }

    /// The full URL a call will be sent to.
    pub fn request_url(&self, call: &Call) -> Url {
        let url = append_path(&self.inner.api_url, call.path);
        append_query(&url, &call.query_pairs())
    }

    /// Issue a call and hand back the unread response.
    ///
    /// Nothing is sent if the client is closed or `cancel` has already
    /// fired. Non-success statuses become [`ApiError::HttpStatus`].
    pub async fn execute(
        &self,
        call: Call,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, ApiError> {
        let http = self.http_client()?;
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let url = self.request_url(&call);
        let builder = match call.form {
            Some(form) => {
                tracing::debug!(%url, "POST");
                http.post(url).multipart(form)
            }
            None => {
                tracing::debug!(%url, "GET");
                http.get(url)
            }
        };

        let response = guard(cancel, builder.send()).await?;
        let status = response.status();
        if !status.is_success() {
            let body = RawResponse::new(response, cancel.clone()).text().await?;
            tracing::debug!(%status, body = %body, "rpc call failed");
            return Err(ApiError::HttpStatus(status, body));
        }

        Ok(RawResponse::new(response, cancel.clone()))
    }

    /// Issue a typed request and decode its response.
    pub async fn call<T: ApiRequest>(
        &self,
        request: &T,
        cancel: &CancellationToken,
    ) -> Result<T::Response, ApiError> {
        let call = request.build_call()?;
        let path = call.path;
        let body = self.execute(call, cancel).await?.bytes().await?;
        tracing::trace!(path, len = body.len(), "rpc response received");
        T::decode(body)
    }
}

impl Config {
    fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

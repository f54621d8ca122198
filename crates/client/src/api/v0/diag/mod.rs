use bytes::Bytes;
use tokio_util::sync::CancellationToken;

pub mod net;

pub use net::{DiagVis, NetRequest};

use crate::api::client::{ApiClient, ApiError};

/// `diag/*` commands.
#[derive(Debug, Clone)]
pub struct Diag {
    client: ApiClient,
}

impl Diag {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn net(
        &self,
        timeout: Option<&str>,
        vis: Option<DiagVis>,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ApiError> {
        let request = NetRequest {
            timeout: timeout.map(str::to_string),
            vis,
        };
        self.client.call(&request, cancel).await
    }
}

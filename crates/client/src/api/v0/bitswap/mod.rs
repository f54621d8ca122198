use bytes::Bytes;
use tokio_util::sync::CancellationToken;

pub mod stat;
pub mod unwant;
pub mod wantlist;

pub use stat::{BitswapStat, StatRequest};
pub use unwant::UnwantRequest;
pub use wantlist::WantlistRequest;

use crate::api::client::{ApiClient, ApiError};

/// `bitswap/*` commands.
#[derive(Debug, Clone)]
pub struct BitSwap {
    client: ApiClient,
}

impl BitSwap {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn stat(&self, cancel: &CancellationToken) -> Result<BitswapStat, ApiError> {
        self.client.call(&StatRequest, cancel).await
    }

    pub async fn unwant(&self, key: &str, cancel: &CancellationToken) -> Result<Bytes, ApiError> {
        let request = UnwantRequest {
            key: key.to_string(),
        };
        self.client.call(&request, cancel).await
    }

    /// Without a `peer` the daemon answers for the local peer.
    pub async fn wantlist(
        &self,
        peer: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ApiError> {
        let request = WantlistRequest {
            peer: peer.map(str::to_string),
        };
        self.client.call(&request, cancel).await
    }
}

use bytes::Bytes;
use tokio_util::sync::CancellationToken;

pub mod find_peer;
pub mod find_provs;
pub mod query;

pub use find_peer::FindPeerRequest;
pub use find_provs::FindProvsRequest;
pub use query::QueryRequest;

use crate::api::client::{ApiClient, ApiError};

/// `dht/*` commands. Results are streamed by the daemon as
/// newline-delimited JSON events and handed back unparsed.
#[derive(Debug, Clone)]
pub struct Dht {
    client: ApiClient,
}

impl Dht {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn find_peer(
        &self,
        peer_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ApiError> {
        let request = FindPeerRequest {
            peer_id: peer_id.to_string(),
        };
        self.client.call(&request, cancel).await
    }

    pub async fn find_provs(
        &self,
        key: &str,
        verbose: bool,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ApiError> {
        let request = FindProvsRequest {
            key: key.to_string(),
            verbose,
        };
        self.client.call(&request, cancel).await
    }

    pub async fn query(
        &self,
        peer_id: &str,
        verbose: bool,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ApiError> {
        let request = QueryRequest {
            peer_id: peer_id.to_string(),
            verbose,
        };
        self.client.call(&request, cancel).await
    }
}

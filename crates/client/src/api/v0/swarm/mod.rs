use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

pub mod addrs;
pub mod peers;

pub use addrs::AddrsRequest;
pub use peers::{PeersRequest, SwarmPeer};

use common::prelude::MultiHash;

use crate::api::client::{ApiClient, ApiError};

/// `swarm/*` commands for inspecting the node's connections.
#[derive(Debug, Clone)]
pub struct Swarm {
    client: ApiClient,
}

impl Swarm {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn peers(&self, cancel: &CancellationToken) -> Result<Vec<SwarmPeer>, ApiError> {
        self.client.call(&PeersRequest, cancel).await
    }

    pub async fn addrs(
        &self,
        cancel: &CancellationToken,
    ) -> Result<BTreeMap<MultiHash, Vec<String>>, ApiError> {
        self.client.call(&AddrsRequest, cancel).await
    }
}

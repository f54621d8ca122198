use tokio_util::sync::CancellationToken;

pub mod local;

pub use local::LocalRequest;

use common::prelude::MultiHash;

use crate::api::client::{ApiClient, ApiError};

/// `refs/*` commands.
#[derive(Debug, Clone)]
pub struct Refs {
    client: ApiClient,
}

impl Refs {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn local(&self, cancel: &CancellationToken) -> Result<Vec<MultiHash>, ApiError> {
        self.client.call(&LocalRequest, cancel).await
    }
}

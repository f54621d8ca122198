use tokio_util::sync::CancellationToken;

pub mod gc;

pub use gc::GcRequest;

use common::prelude::MultiHash;

use crate::api::client::{ApiClient, ApiError};

/// `repo/*` maintenance commands.
#[derive(Debug, Clone)]
pub struct Repo {
    client: ApiClient,
}

impl Repo {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Run a garbage collection and return the keys that were removed.
    pub async fn gc(&self, quiet: bool, cancel: &CancellationToken) -> Result<Vec<MultiHash>, ApiError> {
        self.client.call(&GcRequest { quiet }, cancel).await
    }
}

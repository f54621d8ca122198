use tokio_util::sync::CancellationToken;

pub mod ls;
pub mod rm;

pub use ls::{LsRequest, PinType, PinnedObject};
pub use rm::RmRequest;

use common::prelude::MultiHash;

use crate::api::client::{ApiClient, ApiError};

/// `pin/*` commands.
#[derive(Debug, Clone)]
pub struct Pin {
    client: ApiClient,
}

impl Pin {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List pinned objects, all of them when `pin_type` is `None`.
    pub async fn ls(
        &self,
        pin_type: Option<PinType>,
        cancel: &CancellationToken,
    ) -> Result<Vec<PinnedObject>, ApiError> {
        self.client.call(&LsRequest { pin_type }, cancel).await
    }

    /// Unpin `key`, returning the keys the daemon unpinned.
    pub async fn rm(
        &self,
        key: &str,
        recursive: bool,
        cancel: &CancellationToken,
    ) -> Result<Vec<MultiHash>, ApiError> {
        let request = RmRequest {
            key: key.to_string(),
            recursive,
        };
        self.client.call(&request, cancel).await
    }
}

use tokio_util::sync::CancellationToken;

pub mod publish;
pub mod resolve;

pub use publish::{NamePublish, PublishRequest};
pub use resolve::ResolveRequest;

use crate::api::client::{ApiClient, ApiError};

/// `name/*` commands for working with IPNS.
#[derive(Debug, Clone)]
pub struct Name {
    client: ApiClient,
}

impl Name {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Publish `path` under `name`, or under the node's own id when
    /// `name` is `None`.
    pub async fn publish(
        &self,
        name: Option<&str>,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<NamePublish, ApiError> {
        let request = PublishRequest {
            path: path.to_string(),
            name: name.map(str::to_string),
        };
        self.client.call(&request, cancel).await
    }

    pub async fn resolve(
        &self,
        name: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<String, ApiError> {
        let request = ResolveRequest {
            name: name.map(str::to_string),
        };
        self.client.call(&request, cancel).await
    }
}

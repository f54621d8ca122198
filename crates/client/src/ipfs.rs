use bytes::Bytes;
use common::prelude::MultiHash;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::api::client::{ApiClient, ApiError, ApiRequest, RawResponse};
use crate::api::v0::{
    AddRequest, BitSwap, CatRequest, CommandInfo, CommandsRequest, Dht, Diag, LsObject,
    LsRequest, Name, Object, Pin, Refs, Repo, Stats, Swarm, VersionInfo, VersionRequest,
};
use crate::config::Config;

/// Entry point for talking to a daemon's RPC API.
///
/// Root commands are methods on the client itself; everything else is
/// reached through a command group (`bitswap()`, `object()`, ...).
/// Groups are handles onto the same transport, so closing the client
/// closes every group obtained from it.
#[derive(Debug, Clone)]
pub struct IpfsClient {
    api: ApiClient,
}

impl IpfsClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    /// Reuse an existing `reqwest::Client`, e.g. one shared with other
    /// parts of the application.
    pub fn from_http_client(remote: &Url, client: Client) -> Self {
        Self {
            api: ApiClient::with_http_client(remote, client),
        }
    }

    /// The low-level executor, for endpoints without a typed wrapper.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn base_url(&self) -> &Url {
        self.api.base_url()
    }

    pub fn bitswap(&self) -> BitSwap {
        BitSwap::new(self.api.clone())
    }

    pub fn dht(&self) -> Dht {
        Dht::new(self.api.clone())
    }

    pub fn diag(&self) -> Diag {
        Diag::new(self.api.clone())
    }

    pub fn name(&self) -> Name {
        Name::new(self.api.clone())
    }

    pub fn object(&self) -> Object {
        Object::new(self.api.clone())
    }

    pub fn pin(&self) -> Pin {
        Pin::new(self.api.clone())
    }

    pub fn refs(&self) -> Refs {
        Refs::new(self.api.clone())
    }

    pub fn repo(&self) -> Repo {
        Repo::new(self.api.clone())
    }

    pub fn stats(&self) -> Stats {
        Stats::new(self.api.clone())
    }

    pub fn swarm(&self) -> Swarm {
        Swarm::new(self.api.clone())
    }

    /// Upload `data` as a single file called `name`, returning its key.
    pub async fn add(
        &self,
        name: &str,
        data: impl Into<Bytes>,
        cancel: &CancellationToken,
    ) -> Result<MultiHash, ApiError> {
        let request = AddRequest {
            name: name.to_string(),
            data: data.into(),
        };
        self.api.call(&request, cancel).await
    }

    /// The daemon's full command tree.
    pub async fn commands(&self, cancel: &CancellationToken) -> Result<CommandInfo, ApiError> {
        self.api.call(&CommandsRequest, cancel).await
    }

    pub async fn version(&self, cancel: &CancellationToken) -> Result<VersionInfo, ApiError> {
        self.api.call(&VersionRequest, cancel).await
    }

    pub async fn ls(&self, path: &str, cancel: &CancellationToken) -> Result<Vec<LsObject>, ApiError> {
        let request = LsRequest {
            path: path.to_string(),
        };
        self.api.call(&request, cancel).await
    }

    pub async fn cat(&self, path: &str, cancel: &CancellationToken) -> Result<Bytes, ApiError> {
        let request = CatRequest {
            path: path.to_string(),
        };
        self.api.call(&request, cancel).await
    }

    /// Like [`IpfsClient::cat`], but leaves the body unread.
    pub async fn cat_stream(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, ApiError> {
        let request = CatRequest {
            path: path.to_string(),
        };
        self.api.execute(request.build_call()?, cancel).await
    }

    pub fn close(&self) {
        self.api.close();
    }

    pub fn is_closed(&self) -> bool {
        self.api.is_closed()
    }
}

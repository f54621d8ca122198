use bytes::Bytes;
use tokio_util::sync::CancellationToken;

pub mod data;
pub mod get;
pub mod links;
pub mod put;
pub mod stat;

pub use data::DataRequest;
pub use get::GetRequest;
pub use links::{LinksRequest, ObjectLinks};
pub use put::PutRequest;
pub use stat::{ObjectStat, StatRequest};

use crate::api::client::{ApiClient, ApiError, ApiRequest, RawResponse};

/// Serialization formats for DAG nodes.
///
/// Only `json` and `protobuf` are understood by the daemon's `object`
/// commands (`data`, `get`, `put`); the others are rejected before
/// anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ObjectEncoding {
    Json,
    Protobuf,
    Xml,
    Base64,
}

impl ObjectEncoding {
    /// The literal sent as the `encoding` flag, if supported.
    pub fn wire_value(self) -> Option<&'static str> {
        match self {
            ObjectEncoding::Json => Some("json"),
            ObjectEncoding::Protobuf => Some("protobuf"),
            ObjectEncoding::Xml | ObjectEncoding::Base64 => None,
        }
    }

    pub(crate) fn require(self) -> Result<&'static str, ApiError> {
        self.wire_value().ok_or_else(|| {
            ApiError::invalid_argument(format!("unsupported object encoding: {:?}", self))
        })
    }
}

/// `object/*` plumbing commands for raw DAG nodes.
#[derive(Debug, Clone)]
pub struct Object {
    client: ApiClient,
}

impl Object {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn data(
        &self,
        key: &str,
        encoding: ObjectEncoding,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ApiError> {
        let request = DataRequest {
            key: key.to_string(),
            encoding,
        };
        self.client.call(&request, cancel).await
    }

    /// Like [`Object::data`], but hands back the unread response so
    /// large nodes can be consumed chunk by chunk.
    pub async fn data_stream(
        &self,
        key: &str,
        encoding: ObjectEncoding,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, ApiError> {
        let request = DataRequest {
            key: key.to_string(),
            encoding,
        };
        self.client.execute(request.build_call()?, cancel).await
    }

    pub async fn get(
        &self,
        key: &str,
        encoding: ObjectEncoding,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ApiError> {
        let request = GetRequest {
            key: key.to_string(),
            encoding,
        };
        self.client.call(&request, cancel).await
    }

    pub async fn links(
        &self,
        key: &str,
        cancel: &CancellationToken,
    ) -> Result<ObjectLinks, ApiError> {
        let request = LinksRequest {
            key: key.to_string(),
        };
        self.client.call(&request, cancel).await
    }

    /// Store `data`, serialized as `encoding`, as a new DAG node.
    pub async fn put(
        &self,
        data: impl Into<Bytes>,
        encoding: ObjectEncoding,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ApiError> {
        let request = PutRequest {
            data: data.into(),
            encoding,
        };
        self.client.call(&request, cancel).await
    }

    pub async fn stat(&self, key: &str, cancel: &CancellationToken) -> Result<ObjectStat, ApiError> {
        let request = StatRequest {
            key: key.to_string(),
        };
        self.client.call(&request, cancel).await
    }
}

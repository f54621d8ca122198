use bytes::Bytes;
use serde::Deserialize;

use common::prelude::{MultiHash, MultiHashError};

use crate::api::client::{decode_json, require_arg, ApiError, ApiRequest, Call, WireShape};

/// Print statistics for a DAG node.
#[derive(Debug, Clone, clap::Args)]
pub struct StatRequest {
    /// Key of the object, a base58 multihash
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectStat {
    pub hash: MultiHash,
    pub num_links: u64,
    /// Size of the serialized node
    pub block_size: u64,
    pub links_size: u64,
    pub data_size: u64,
    /// Size of the node and everything it links to
    pub cumulative_size: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ObjectStatWire {
    hash: String,
    #[serde(default)]
    num_links: u64,
    #[serde(default)]
    block_size: u64,
    #[serde(default)]
    links_size: u64,
    #[serde(default)]
    data_size: u64,
    #[serde(default)]
    cumulative_size: u64,
}

impl WireShape for ObjectStatWire {
    type Domain = ObjectStat;

    fn into_domain(self) -> Result<Self::Domain, MultiHashError> {
        Ok(ObjectStat {
            hash: self.hash.parse()?,
            num_links: self.num_links,
            block_size: self.block_size,
            links_size: self.links_size,
            data_size: self.data_size,
            cumulative_size: self.cumulative_size,
        })
    }
}

impl ApiRequest for StatRequest {
    type Response = ObjectStat;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("object/stat").arg(require_arg("key", &self.key)?))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_json::<ObjectStatWire>(&body)
    }
}

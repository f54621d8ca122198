use std::collections::HashSet;

use bytes::Bytes;
use serde::Deserialize;

use common::prelude::{MultiHash, MultiHashError};

use crate::api::client::{
    decode_json, null_as_default, parse_hashes, ApiError, ApiRequest, Call, WireShape,
};

/// Show diagnostic information on the bitswap agent.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatRequest;

/// Snapshot of the local bitswap agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitswapStat {
    pub provide_buf_len: u64,
    /// Keys currently wanted, in the order the daemon listed them
    pub wantlist: Vec<String>,
    pub peers: HashSet<MultiHash>,
    pub blocks_received: u64,
    pub dup_blks_received: u64,
    pub dup_data_received: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BitswapStatWire {
    #[serde(default)]
    provide_buf_len: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    wantlist: Vec<WantKey>,
    #[serde(default, deserialize_with = "null_as_default")]
    peers: Vec<String>,
    #[serde(default)]
    blocks_received: u64,
    #[serde(default)]
    dup_blks_received: u64,
    #[serde(default)]
    dup_data_received: u64,
}

// older daemons list plain strings, newer ones `{"/": "<cid>"}` links
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WantKey {
    Plain(String),
    Link {
        #[serde(rename = "/")]
        cid: String,
    },
}

impl From<WantKey> for String {
    fn from(key: WantKey) -> Self {
        match key {
            WantKey::Plain(key) => key,
            WantKey::Link { cid } => cid,
        }
    }
}

impl WireShape for BitswapStatWire {
    type Domain = BitswapStat;

    fn into_domain(self) -> Result<Self::Domain, MultiHashError> {
        Ok(BitswapStat {
            provide_buf_len: self.provide_buf_len,
            wantlist: self.wantlist.into_iter().map(String::from).collect(),
            peers: parse_hashes(self.peers)?,
            blocks_received: self.blocks_received,
            dup_blks_received: self.dup_blks_received,
            dup_data_received: self.dup_data_received,
        })
    }
}

impl ApiRequest for StatRequest {
    type Response = BitswapStat;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("bitswap/stat"))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_json::<BitswapStatWire>(&body)
    }
}

use bytes::Bytes;
use serde::Deserialize;

use common::prelude::MultiHash;

use crate::api::client::{parse_hashes, ApiError, ApiRequest, Call};

/// List every block key held in the local repo.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LocalRequest;

#[derive(Debug, Deserialize)]
struct RefWire {
    #[serde(rename = "Ref", default)]
    key: String,
    #[serde(rename = "Err", default)]
    err: String,
}

impl ApiRequest for LocalRequest {
    type Response = Vec<MultiHash>;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("refs/local"))
    }

    /// One `{"Ref": "<key>", "Err": ""}` record per block; records that
    /// carry an error are skipped.
    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        let mut keys = Vec::new();
        for record in serde_json::Deserializer::from_slice(&body).into_iter::<RefWire>() {
            let record = record?;
            if !record.err.is_empty() {
                tracing::debug!(key = %record.key, err = %record.err, "skipping local ref");
                continue;
            }
            keys.push(record.key);
        }
        Ok(parse_hashes(keys)?)
    }
}

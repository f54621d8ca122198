use std::collections::BTreeMap;

use bytes::Bytes;
use serde::Deserialize;

use common::prelude::{MultiHash, MultiHashError};

use crate::api::client::{decode_json, null_as_default, ApiError, ApiRequest, Call, WireShape};

/// List the known addresses of every peer in the address book.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddrsRequest;

#[derive(Debug, Deserialize)]
struct AddrsWire {
    #[serde(rename = "Addrs", default, deserialize_with = "null_as_default")]
    addrs: BTreeMap<String, Vec<String>>,
}

impl WireShape for AddrsWire {
    type Domain = BTreeMap<MultiHash, Vec<String>>;

    fn into_domain(self) -> Result<Self::Domain, MultiHashError> {
        self.addrs
            .into_iter()
            .map(|(peer, addrs)| Ok((peer.parse()?, addrs)))
            .collect()
    }
}

impl ApiRequest for AddrsRequest {
    type Response = BTreeMap<MultiHash, Vec<String>>;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("swarm/addrs"))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_json::<AddrsWire>(&body)
    }
}

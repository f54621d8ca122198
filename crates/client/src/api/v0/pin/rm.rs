use bytes::Bytes;
use serde::Deserialize;

use common::prelude::{MultiHash, MultiHashError};

use crate::api::client::{
    decode_json, null_as_default, parse_hashes, require_arg, ApiError, ApiRequest, Call, Flags,
    WireShape,
};

/// Unpin an object so it can be garbage collected.
#[derive(Debug, Clone, clap::Args)]
pub struct RmRequest {
    /// Key of the pinned object
    pub key: String,

    /// Also unpin everything the object links to
    #[arg(long, short)]
    pub recursive: bool,
}

#[derive(Debug, Deserialize)]
struct PinRmWire {
    #[serde(rename = "Pins", default, deserialize_with = "null_as_default")]
    pins: Vec<String>,
}

impl WireShape for PinRmWire {
    type Domain = Vec<MultiHash>;

    fn into_domain(self) -> Result<Self::Domain, MultiHashError> {
        parse_hashes(self.pins)
    }
}

impl ApiRequest for RmRequest {
    type Response = Vec<MultiHash>;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("pin/rm")
            .arg(require_arg("key", &self.key)?)
            .flags(Flags::new().with("recursive", self.recursive)))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_json::<PinRmWire>(&body)
    }
}

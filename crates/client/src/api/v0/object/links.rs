use bytes::Bytes;
use serde::Deserialize;

use common::prelude::{Link, MultiHash, MultiHashError};

use crate::api::client::{
    decode_json, null_as_default, require_arg, ApiError, ApiRequest, Call, WireShape,
};

/// List the links of a DAG node.
#[derive(Debug, Clone, clap::Args)]
pub struct LinksRequest {
    /// Key of the object, a base58 multihash
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLinks {
    pub hash: MultiHash,
    pub links: Vec<Link>,
}

/// A link exactly as the daemon encodes it; shared with `ls`.
#[derive(Debug, Deserialize)]
pub(crate) struct LinkWire {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Hash")]
    hash: String,
    #[serde(rename = "Size", default)]
    size: u64,
}

impl LinkWire {
    pub(crate) fn into_link(self) -> Result<Link, MultiHashError> {
        Ok(Link::new(self.name, self.hash.parse()?, self.size))
    }
}

#[derive(Debug, Deserialize)]
struct ObjectLinksWire {
    #[serde(rename = "Hash")]
    hash: String,
    #[serde(rename = "Links", default, deserialize_with = "null_as_default")]
    links: Vec<LinkWire>,
}

impl WireShape for ObjectLinksWire {
    type Domain = ObjectLinks;

    fn into_domain(self) -> Result<Self::Domain, MultiHashError> {
        Ok(ObjectLinks {
            hash: self.hash.parse()?,
            links: self
                .links
                .into_iter()
                .map(LinkWire::into_link)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl ApiRequest for LinksRequest {
    type Response = ObjectLinks;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("object/links").arg(require_arg("key", &self.key)?))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_json::<ObjectLinksWire>(&body)
    }
}

use bytes::Bytes;

use super::ObjectEncoding;
use crate::api::client::{require_arg, ApiError, ApiRequest, Call, Flags};

/// Output the raw bytes stored in a DAG node.
#[derive(Debug, Clone, clap::Args)]
pub struct DataRequest {
    /// Key of the object, a base58 multihash
    pub key: String,

    #[arg(long, value_enum, default_value_t = ObjectEncoding::Json)]
    pub encoding: ObjectEncoding,
}

impl ApiRequest for DataRequest {
    type Response = Bytes;

    fn build_call(&self) -> Result<Call, ApiError> {
        let key = require_arg("key", &self.key)?;
        Ok(Call::new("object/data")
            .arg(key)
            .flags(Flags::new().with("encoding", self.encoding.require()?)))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        Ok(body)
    }
}

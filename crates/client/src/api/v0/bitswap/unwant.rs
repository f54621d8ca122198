use bytes::Bytes;

use crate::api::client::{require_arg, ApiError, ApiRequest, Call};

/// Remove a block from the local want-list.
#[derive(Debug, Clone, clap::Args)]
pub struct UnwantRequest {
    /// Key to remove from the want-list
    pub key: String,
}

impl ApiRequest for UnwantRequest {
    type Response = Bytes;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("bitswap/unwant").arg(require_arg("key", &self.key)?))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        Ok(body)
    }
}

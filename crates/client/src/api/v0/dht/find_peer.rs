use bytes::Bytes;

use crate::api::client::{require_arg, ApiError, ApiRequest, Call};

/// Look up the addresses of a peer through the DHT.
#[derive(Debug, Clone, clap::Args)]
pub struct FindPeerRequest {
    /// Id of the peer to search for
    pub peer_id: String,
}

impl ApiRequest for FindPeerRequest {
    type Response = Bytes;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("dht/findpeer").arg(require_arg("peer id", &self.peer_id)?))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        Ok(body)
    }
}

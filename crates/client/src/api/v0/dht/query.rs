use bytes::Bytes;

use crate::api::client::{require_arg, ApiError, ApiRequest, Call, Flags};

/// Find the peers closest to a peer id by querying the DHT.
#[derive(Debug, Clone, clap::Args)]
pub struct QueryRequest {
    /// Peer id to run the query against
    pub peer_id: String,

    /// Write extra information
    #[arg(long, short)]
    pub verbose: bool,
}

impl ApiRequest for QueryRequest {
    type Response = Bytes;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("dht/query")
            .arg(require_arg("peer id", &self.peer_id)?)
            .flags(Flags::new().with("verbose", self.verbose)))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        Ok(body)
    }
}

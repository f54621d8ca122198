use bytes::Bytes;

use crate::api::client::{ApiError, ApiRequest, Call, Flags};

/// Show the blocks currently on a want-list.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WantlistRequest {
    /// Peer whose want-list to show (defaults to the local peer)
    #[arg(long)]
    pub peer: Option<String>,
}

impl ApiRequest for WantlistRequest {
    type Response = Bytes;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("bitswap/wantlist").flags(Flags::new().with("peer", &self.peer)))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        Ok(body)
    }
}

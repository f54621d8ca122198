use bytes::Bytes;

use crate::api::client::{require_arg, ApiError, ApiRequest, Call, Flags};

/// Find peers able to provide a key.
#[derive(Debug, Clone, clap::Args)]
pub struct FindProvsRequest {
    /// Key to find providers for
    pub key: String,

    /// Write extra information
    #[arg(long, short)]
    pub verbose: bool,
}

impl ApiRequest for FindProvsRequest {
    type Response = Bytes;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("dht/findprovs")
            .arg(require_arg("key", &self.key)?)
            .flags(Flags::new().with("verbose", self.verbose)))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        Ok(body)
    }
}

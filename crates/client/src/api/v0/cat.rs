use bytes::Bytes;

use crate::api::client::{require_arg, ApiError, ApiRequest, Call};

/// Read the contents of a file.
#[derive(Debug, Clone, clap::Args)]
pub struct CatRequest {
    /// Path of the file, e.g. a hash or `/ipfs/<hash>/readme`
    pub path: String,
}

impl ApiRequest for CatRequest {
    type Response = Bytes;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("cat").arg(require_arg("path", &self.path)?))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        Ok(body)
    }
}

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::api::client::{decode_plain, ApiError, ApiRequest, Call};

#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VersionInfo {
    pub version: String,
    pub commit: String,
    pub repo: String,
    pub system: String,
    pub golang: String,
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ipfs version {}", self.version)?;
        if !self.commit.is_empty() {
            write!(f, "-{}", self.commit)?;
        }
        Ok(())
    }
}

impl ApiRequest for VersionRequest {
    type Response = VersionInfo;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("version"))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_plain(&body)
    }
}

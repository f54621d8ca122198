use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::api::client::{decode_plain, null_as_default, ApiError, ApiRequest, Call};

#[derive(Debug, Clone, Default, clap::Args)]
pub struct CommandsRequest;

/// One node of the daemon's command tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Subcommands", default, deserialize_with = "null_as_default")]
    pub subcommands: Vec<CommandInfo>,
    #[serde(rename = "Options", default, deserialize_with = "null_as_default")]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    #[serde(rename = "Names", default, deserialize_with = "null_as_default")]
    pub names: Vec<String>,
}

impl CommandInfo {
    /// Every command below this one as a space separated path,
    /// depth first, e.g. `ipfs object stat`.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths(&self.name, &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &str, paths: &mut Vec<String>) {
        for sub in &self.subcommands {
            let path = if prefix.is_empty() {
                sub.name.clone()
            } else {
                format!("{} {}", prefix, sub.name)
            };
            paths.push(path.clone());
            sub.collect_paths(&path, paths);
        }
    }
}

impl ApiRequest for CommandsRequest {
    type Response = CommandInfo;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("commands"))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_plain(&body)
    }
}

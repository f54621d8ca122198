use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use common::prelude::MultiHash;

use crate::api::client::{require_arg, ApiError, ApiRequest, Call};

/// Name of the multipart part carrying the content.
const FILE_PART: &str = "file";

/// Add a single file's content to the node.
#[derive(Debug, Clone)]
pub struct AddRequest {
    /// File name recorded by the daemon
    pub name: String,
    pub data: Bytes,
}

#[derive(Debug, Deserialize)]
struct AddedWire {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Hash", default)]
    hash: Option<String>,
}

impl ApiRequest for AddRequest {
    type Response = MultiHash;

    fn build_call(&self) -> Result<Call, ApiError> {
        let name = require_arg("name", &self.name)?;
        let part = Part::bytes(self.data.to_vec())
            .file_name(name)
            .mime_str("application/octet-stream")?;

        Ok(Call::new("add").form(Form::new().part(FILE_PART, part)))
    }

    /// The daemon may stream progress records before the final one; the
    /// last record that carries a hash names the added content.
    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        let mut added = None;
        for record in serde_json::Deserializer::from_slice(&body).into_iter::<AddedWire>() {
            let record = record?;
            if let Some(hash) = record.hash {
                tracing::trace!(name = %record.name, %hash, "added");
                added = Some(hash);
            }
        }

        match added {
            Some(hash) => Ok(hash.parse()?),
            None => Err(ApiError::MalformedResponse(serde::de::Error::custom(
                "add response carried no hash",
            ))),
        }
    }
}

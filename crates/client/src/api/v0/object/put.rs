use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use super::ObjectEncoding;
use crate::api::client::{ApiError, ApiRequest, Call, Flags};

/// Name of the multipart part carrying the node.
const FILE_PART: &str = "file";

/// Store a serialized DAG node.
#[derive(Debug, Clone, clap::Args)]
pub struct PutRequest {
    /// Serialized node to store
    #[arg(value_parser = parse_data)]
    pub data: Bytes,

    /// Encoding `data` is written in
    #[arg(long, value_enum, default_value_t = ObjectEncoding::Json)]
    pub encoding: ObjectEncoding,
}

fn parse_data(value: &str) -> Result<Bytes, std::convert::Infallible> {
    Ok(Bytes::copy_from_slice(value.as_bytes()))
}

impl ApiRequest for PutRequest {
    type Response = Bytes;

    fn build_call(&self) -> Result<Call, ApiError> {
        let encoding = self.encoding.require()?;
        let part = Part::bytes(self.data.to_vec())
            .file_name(FILE_PART)
            .mime_str("application/octet-stream")?;

        Ok(Call::new("object/put")
            .flags(Flags::new().with("encoding", encoding))
            .form(Form::new().part(FILE_PART, part)))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        Ok(body)
    }
}

use std::collections::BTreeMap;

use bytes::Bytes;

use common::prelude::MultiHash;

use crate::api::client::{parse_hashes, ApiError, ApiRequest, Call, Flags};

/// Remove unpinned blocks from the local repo.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GcRequest {
    /// Ask the daemon to report only the removed keys
    #[arg(long, short)]
    pub quiet: bool,
}

impl ApiRequest for GcRequest {
    type Response = Vec<MultiHash>;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("repo/gc").flags(Flags::new().with("quiet", self.quiet)))
    }

    /// The daemon streams one `{"Key": "<hash>"}` record per removed
    /// block; an empty body means nothing was collected.
    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let mut values = Vec::new();
        for record in serde_json::Deserializer::from_slice(&body).into_iter::<BTreeMap<String, String>>()
        {
            values.extend(record?.into_values());
        }
        Ok(parse_hashes(values)?)
    }
}

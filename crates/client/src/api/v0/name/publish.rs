use bytes::Bytes;
use serde::Deserialize;

use common::prelude::{MultiHash, MultiHashError};

use crate::api::client::{decode_json, require_arg, ApiError, ApiRequest, Call, WireShape};

/// Publish an IPFS path under an IPNS name.
#[derive(Debug, Clone, clap::Args)]
pub struct PublishRequest {
    /// Path to publish, e.g. `/ipfs/<hash>`
    pub path: String,

    /// Name (key) to publish under, the node's own id when omitted
    #[arg(long)]
    pub name: Option<String>,
}

/// Name and value the daemon recorded for a publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePublish {
    pub name: String,
    pub value: MultiHash,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NamePublishWire {
    name: String,
    value: String,
}

impl WireShape for NamePublishWire {
    type Domain = NamePublish;

    fn into_domain(self) -> Result<Self::Domain, MultiHashError> {
        Ok(NamePublish {
            name: self.name,
            value: MultiHash::from_ipfs_path(&self.value)?,
        })
    }
}

impl ApiRequest for PublishRequest {
    type Response = NamePublish;

    fn build_call(&self) -> Result<Call, ApiError> {
        let path = require_arg("path", &self.path)?;
        let mut call = Call::new("name/publish");
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            call = call.arg(name);
        }
        Ok(call.arg(path))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_json::<NamePublishWire>(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "QmXarR6rgkQ2fDSHjSY5nM2kuCXKYGViky5nohtwgF65Ec";

    #[test]
    fn test_name_precedes_path() {
        let call = PublishRequest {
            path: format!("/ipfs/{}", HASH),
            name: Some("self".to_string()),
        }
        .build_call()
        .unwrap();
        assert_eq!(call.args, vec!["self".to_string(), format!("/ipfs/{}", HASH)]);
    }

    #[test]
    fn test_name_is_optional() {
        let call = PublishRequest {
            path: HASH.to_string(),
            name: None,
        }
        .build_call()
        .unwrap();
        assert_eq!(call.args, vec![HASH.to_string()]);
    }

    #[test]
    fn test_requires_path() {
        let request = PublishRequest {
            path: String::new(),
            name: Some("self".to_string()),
        };
        assert!(matches!(
            request.build_call(),
            Err(ApiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_decode_strips_ipfs_prefix() {
        let body = format!(
            r#"{{"Name":"QmZTR5bcpQD7cFgTorqxZDYaew1Wqgfbd2ud9QqGPAkK2V","Value":"/ipfs/{}"}}"#,
            HASH
        );
        let published = PublishRequest::decode(Bytes::from(body)).unwrap();
        assert_eq!(
            published.name,
            "QmZTR5bcpQD7cFgTorqxZDYaew1Wqgfbd2ud9QqGPAkK2V"
        );
        assert_eq!(published.value.as_str(), HASH);
    }
}

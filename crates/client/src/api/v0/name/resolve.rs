use bytes::Bytes;
use serde::Deserialize;

use crate::api::client::{decode_plain, ApiError, ApiRequest, Call};

/// Resolve an IPNS name to the path it currently points at.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveRequest {
    /// Name to resolve, the node's own id when omitted
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResolveWire {
    #[serde(rename = "Path")]
    path: String,
}

impl ApiRequest for ResolveRequest {
    type Response = String;

    fn build_call(&self) -> Result<Call, ApiError> {
        let call = Call::new("name/resolve");
        Ok(match self.name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => call.arg(name),
            None => call,
        })
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        Ok(decode_plain::<ResolveWire>(&body)?.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_name_sends_no_args() {
        let call = ResolveRequest::default().build_call().unwrap();
        assert!(call.args.is_empty());
    }

    #[test]
    fn test_decode_path() {
        let body = Bytes::from_static(
            br#"{"Path":"/ipfs/QmXarR6rgkQ2fDSHjSY5nM2kuCXKYGViky5nohtwgF65Ec"}"#,
        );
        assert_eq!(
            ResolveRequest::decode(body).unwrap(),
            "/ipfs/QmXarR6rgkQ2fDSHjSY5nM2kuCXKYGViky5nohtwgF65Ec"
        );
        assert!(matches!(
            ResolveRequest::decode(Bytes::from_static(b"{}")),
            Err(ApiError::MalformedResponse(_))
        ));
    }
}

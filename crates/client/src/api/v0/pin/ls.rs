use std::collections::BTreeMap;

use bytes::Bytes;
use serde::Deserialize;

use common::prelude::{MultiHash, MultiHashError};

use crate::api::client::{
    decode_json, null_as_default, ApiError, ApiRequest, Call, Flags, WireShape,
};

/// Which pins to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PinType {
    Direct,
    Indirect,
    Recursive,
    All,
}

impl PinType {
    pub fn as_str(self) -> &'static str {
        match self {
            PinType::Direct => "direct",
            PinType::Indirect => "indirect",
            PinType::Recursive => "recursive",
            PinType::All => "all",
        }
    }
}

/// List objects pinned to local storage.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LsRequest {
    /// Only list pins of this type (the daemon lists all by default)
    #[arg(long = "type", value_enum)]
    pub pin_type: Option<PinType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedObject {
    pub hash: MultiHash,
    /// Pin type as reported, e.g. `recursive` or `indirect through <hash>`
    pub kind: String,
}

#[derive(Debug, Deserialize)]
struct PinLsWire {
    #[serde(rename = "Keys", default, deserialize_with = "null_as_default")]
    keys: BTreeMap<String, PinInfoWire>,
}

#[derive(Debug, Deserialize)]
struct PinInfoWire {
    #[serde(rename = "Type", default)]
    kind: String,
}

impl WireShape for PinLsWire {
    type Domain = Vec<PinnedObject>;

    fn into_domain(self) -> Result<Self::Domain, MultiHashError> {
        self.keys
            .into_iter()
            .map(|(hash, info)| {
                Ok(PinnedObject {
                    hash: hash.parse()?,
                    kind: info.kind,
                })
            })
            .collect()
    }
}

impl ApiRequest for LsRequest {
    type Response = Vec<PinnedObject>;

    fn build_call(&self) -> Result<Call, ApiError> {
        let pin_type = self.pin_type.map(PinType::as_str);
        Ok(Call::new("pin/ls").flags(Flags::new().with("type", pin_type)))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_json::<PinLsWire>(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "QmZTR5bcpQD7cFgTorqxZDYaew1Wqgfbd2ud9QqGPAkK2V";
    const B: &str = "QmYCvbfNbCwFR45HiNP45rwJgvatpiW38D961L5qAhUM5Y";

    #[test]
    fn test_type_flag() {
        assert!(LsRequest::default().build_call().unwrap().flags.is_empty());

        let call = LsRequest {
            pin_type: Some(PinType::Recursive),
        }
        .build_call()
        .unwrap();
        assert_eq!(call.flags.get("type"), Some("recursive"));
    }

    #[test]
    fn test_decode_keys() {
        let body = format!(
            r#"{{"Keys":{{"{}":{{"Type":"recursive"}},"{}":{{"Type":"indirect"}}}}}}"#,
            A, B
        );
        let pins = LsRequest::decode(Bytes::from(body)).unwrap();
        assert_eq!(pins.len(), 2);

        let a = pins.iter().find(|pin| pin.hash.as_str() == A).unwrap();
        assert_eq!(a.kind, "recursive");
    }

    #[test]
    fn test_no_pins() {
        assert!(LsRequest::decode(Bytes::from_static(br#"{"Keys":null}"#))
            .unwrap()
            .is_empty());
    }
}

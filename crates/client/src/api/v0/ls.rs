use bytes::Bytes;
use serde::Deserialize;

use common::prelude::{Link, MultiHash, MultiHashError};

use super::object::links::LinkWire;
use crate::api::client::{
    decode_json, null_as_default, require_arg, ApiError, ApiRequest, Call, WireShape,
};

#[derive(Debug, Clone, clap::Args)]
pub struct LsRequest {
    /// Path of the object to list, e.g. a hash or `/ipfs/<hash>/dir`
    pub path: String,
}

/// What a listed link points at, as reported by the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Raw,
    Directory,
    File,
    Metadata,
    Symlink,
    HamtShard,
    Unknown(u32),
}

impl From<u32> for EntryKind {
    fn from(code: u32) -> Self {
        match code {
            0 => EntryKind::Raw,
            1 => EntryKind::Directory,
            2 => EntryKind::File,
            3 => EntryKind::Metadata,
            4 => EntryKind::Symlink,
            5 => EntryKind::HamtShard,
            other => EntryKind::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsLink {
    pub link: Link,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsObject {
    pub hash: MultiHash,
    pub links: Vec<LsLink>,
}

#[derive(Debug, Deserialize)]
struct LsWire {
    #[serde(rename = "Objects", default, deserialize_with = "null_as_default")]
    objects: Vec<LsObjectWire>,
}

#[derive(Debug, Deserialize)]
struct LsObjectWire {
    #[serde(rename = "Hash")]
    hash: String,
    #[serde(rename = "Links", default, deserialize_with = "null_as_default")]
    links: Vec<LsLinkWire>,
}

#[derive(Debug, Deserialize)]
struct LsLinkWire {
    #[serde(flatten)]
    link: LinkWire,
    #[serde(rename = "Type", default)]
    kind: u32,
}

impl WireShape for LsWire {
    type Domain = Vec<LsObject>;

    fn into_domain(self) -> Result<Self::Domain, MultiHashError> {
        self.objects
            .into_iter()
            .map(|object| {
                let links = object
                    .links
                    .into_iter()
                    .map(|entry| {
                        Ok(LsLink {
                            link: entry.link.into_link()?,
                            kind: EntryKind::from(entry.kind),
                        })
                    })
                    .collect::<Result<Vec<_>, MultiHashError>>()?;

                Ok(LsObject {
                    hash: object.hash.parse()?,
                    links,
                })
            })
            .collect()
    }
}

impl ApiRequest for LsRequest {
    type Response = Vec<LsObject>;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("ls").arg(require_arg("path", &self.path)?))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_json::<LsWire>(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &[u8] = br#"{"Objects":[{"Hash":"QmXarR6rgkQ2fDSHjSY5nM2kuCXKYGViky5nohtwgF65Ec","Links":[{"Name":"about","Hash":"QmZTR5bcpQD7cFgTorqxZDYaew1Wqgfbd2ud9QqGPAkK2V","Size":1688,"Type":2},{"Name":"contact","Hash":"QmYCvbfNbCwFR45HiNP45rwJgvatpiW38D961L5qAhUM5Y","Size":200,"Type":2},{"Name":"help","Hash":"QmY5heUM5qgRubMDD1og9fhCPA6QdkMp3QCwd4s7gJsyE7","Size":322,"Type":2}]}]}"#;

    #[test]
    fn test_decode_listing() {
        let objects = LsRequest::decode(Bytes::from_static(LISTING)).unwrap();
        assert_eq!(objects.len(), 1);

        let object = &objects[0];
        assert_eq!(
            object.hash.as_str(),
            "QmXarR6rgkQ2fDSHjSY5nM2kuCXKYGViky5nohtwgF65Ec"
        );
        assert_eq!(object.links.len(), 3);
        assert_eq!(object.links[0].link.name, "about");
        assert_eq!(object.links[0].link.size, 1688);
        assert_eq!(object.links[0].kind, EntryKind::File);
        assert_eq!(object.links[2].link.name, "help");
    }

    #[test]
    fn test_requires_path() {
        let request = LsRequest {
            path: String::new(),
        };
        assert!(matches!(
            request.build_call(),
            Err(ApiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_entry_kind_codes() {
        assert_eq!(EntryKind::from(1), EntryKind::Directory);
        assert_eq!(EntryKind::from(42), EntryKind::Unknown(42));
    }
}

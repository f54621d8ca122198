use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use cid::multibase::Base;
use cid::multihash::Multihash;
use cid::Cid;
use serde::{Deserialize, Serialize};

use super::IPFS_PATH_PREFIX;

/// Largest digest we accept, matches the default `Cid` allocation.
const MAX_DIGEST_SIZE: usize = 64;

/**
 * MultiHash
 * =========
 * A self-describing hash as the daemon prints it: either a bare
 *  base58btc multihash (`Qm…` object keys, `12D3…` peer ids) or a
 *  multibase-encoded CID (`bafy…`, `k51…`).
 * We keep the exact string we were handed so that re-encoding a
 *  decoded response gives back what the daemon sent; equality and
 *  ordering follow that string.
 */
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MultiHash {
    repr: String,
    hash: Multihash<MAX_DIGEST_SIZE>,
}

impl MultiHash {
    /// Parse a hash that may be given as an `/ipfs/<hash>` path.
    pub fn from_ipfs_path(path: &str) -> Result<Self, MultiHashError> {
        path.strip_prefix(IPFS_PATH_PREFIX)
            .unwrap_or(path)
            .parse()
    }

    /// The canonical string form this hash was parsed from.
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Multicodec code of the hash function (0x12 for sha2-256).
    pub fn code(&self) -> u64 {
        self.hash.code()
    }

    pub fn digest(&self) -> &[u8] {
        self.hash.digest()
    }

    pub fn multihash(&self) -> &Multihash<MAX_DIGEST_SIZE> {
        &self.hash
    }
}

fn decode_base58(value: &str) -> Result<Multihash<MAX_DIGEST_SIZE>, String> {
    let bytes = Base::Base58Btc.decode(value).map_err(|e| e.to_string())?;
    Multihash::from_bytes(&bytes).map_err(|e| e.to_string())
}

fn decode_cid(value: &str) -> Result<Multihash<MAX_DIGEST_SIZE>, String> {
    Cid::try_from(value)
        .map(|cid| *cid.hash())
        .map_err(|e| e.to_string())
}

impl FromStr for MultiHash {
    type Err = MultiHashError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(MultiHashError::Empty);
        }

        // bare multihashes carry no multibase prefix, so try them first
        //  and only then fall back to a full CID
        let hash = decode_base58(value).or_else(|base58_err| {
            decode_cid(value).map_err(|cid_err| MultiHashError::Invalid {
                value: value.to_string(),
                reason: format!("{base58_err}; {cid_err}"),
            })
        })?;

        Ok(Self {
            repr: value.to_string(),
            hash,
        })
    }
}

impl TryFrom<String> for MultiHash {
    type Error = MultiHashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for MultiHash {
    type Error = MultiHashError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MultiHash> for String {
    fn from(hash: MultiHash) -> Self {
        hash.repr
    }
}

impl From<Cid> for MultiHash {
    fn from(cid: Cid) -> Self {
        Self {
            repr: cid.to_string(),
            hash: *cid.hash(),
        }
    }
}

impl PartialEq for MultiHash {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl Eq for MultiHash {}

impl Hash for MultiHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl PartialOrd for MultiHash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MultiHash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.repr.cmp(&other.repr)
    }
}

impl AsRef<str> for MultiHash {
    fn as_ref(&self) -> &str {
        &self.repr
    }
}

impl fmt::Display for MultiHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MultiHashError {
    #[error("empty hash string")]
    Empty,
    #[error("invalid multihash {value:?}: {reason}")]
    Invalid { value: String, reason: String },
}

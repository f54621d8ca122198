use serde::{Deserialize, Serialize};

use super::MultiHash;

/// A named reference from one DAG node to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub hash: MultiHash,
    /// Cumulative size of the target, in bytes
    pub size: u64,
}

impl Link {
    pub fn new(name: impl Into<String>, hash: MultiHash, size: u64) -> Self {
        Self {
            name: name.into(),
            hash,
            size,
        }
    }

    pub fn hash(&self) -> &MultiHash {
        &self.hash
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.hash, self.size, self.name)
    }
}

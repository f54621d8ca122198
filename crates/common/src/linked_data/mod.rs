mod hash;
mod link;

pub use cid::multibase;
pub use cid::Cid;

pub use hash::{MultiHash, MultiHashError};
pub use link::Link;

/// Path prefix the daemon puts in front of immutable content paths.
pub const IPFS_PATH_PREFIX: &str = "/ipfs/";

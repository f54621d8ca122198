/**
 * Value types for content-addressed data as it
 *  appears on the IPFS RPC wire.
 *  - Self-describing hashes (multihashes / CIDs)
 *  - Named links between DAG nodes
 */
pub mod linked_data;

pub mod prelude {
    pub use crate::linked_data::{multibase, Cid, Link, MultiHash, MultiHashError};
}

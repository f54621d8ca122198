pub mod args;
pub mod op;
pub mod ops;

pub use ops::{Add, Bitswap, Dht, Diag, Init, Name, Object, Pin, Refs, Repo, Stats, Swarm};

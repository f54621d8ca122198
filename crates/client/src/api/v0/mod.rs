pub mod add;
pub mod bitswap;
pub mod cat;
pub mod commands;
pub mod dht;
pub mod diag;
pub mod ls;
pub mod name;
pub mod object;
pub mod pin;
pub mod refs;
pub mod repo;
pub mod stats;
pub mod swarm;
pub mod version;

pub use add::AddRequest;
pub use bitswap::BitSwap;
pub use cat::CatRequest;
pub use commands::{CommandInfo, CommandsRequest};
pub use dht::Dht;
pub use diag::{Diag, DiagVis};
pub use ls::{EntryKind, LsLink, LsObject, LsRequest};
pub use name::Name;
pub use object::{Object, ObjectEncoding};
pub use pin::{Pin, PinType};
pub use refs::Refs;
pub use repo::Repo;
pub use stats::Stats;
pub use swarm::{Swarm, SwarmPeer};
pub use version::{VersionInfo, VersionRequest};

pub mod add;
pub mod bitswap;
pub mod cat;
pub mod commands;
pub mod dht;
pub mod diag;
pub mod init;
pub mod ls;
pub mod name;
pub mod object;
pub mod pin;
pub mod refs;
pub mod repo;
pub mod stats;
pub mod swarm;
pub mod version;

pub use add::Add;
pub use bitswap::Bitswap;
pub use dht::Dht;
pub use diag::Diag;
pub use init::Init;
pub use name::Name;
pub use object::Object;
pub use pin::Pin;
pub use refs::Refs;
pub use repo::Repo;
pub use stats::Stats;
pub use swarm::Swarm;

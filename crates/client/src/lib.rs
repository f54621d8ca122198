/**
 * The RPC layer.
 *  - `client`: call building, dispatch, cancellation and
 *    response decoding shared by every endpoint
 *  - `v0`: one typed request per endpoint, grouped the
 *    way the daemon groups its commands
 */
pub mod api;
pub mod config;
/**
 * High level client: root commands plus handles onto
 *  the `bitswap`, `dht`, `name`, `object`, `repo`
 *  and `stats` command groups.
 */
pub mod ipfs;
/**
 * Where the CLI keeps its configuration on disk
 *  (~/.ipfs-rpc/config.toml by default).
 */
pub mod state;
pub mod uri;

pub use api::client::{ApiClient, ApiError, RawResponse};
pub use config::Config;
pub use ipfs::IpfsClient;
pub use state::{AppState, StateError};
pub use tokio_util::sync::CancellationToken;

pub mod prelude {
    pub use common::prelude::*;

    pub use crate::api::v0::*;
    pub use crate::{ApiError, CancellationToken, Config, IpfsClient};
}

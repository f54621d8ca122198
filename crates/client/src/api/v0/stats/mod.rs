use tokio_util::sync::CancellationToken;

pub mod bw;

pub use bw::{BandwidthStats, BwRequest};

use crate::api::client::{ApiClient, ApiError};

/// `stats/*` commands.
#[derive(Debug, Clone)]
pub struct Stats {
    client: ApiClient,
}

impl Stats {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Bandwidth totals and rates, optionally narrowed to one `peer`
    /// or one `proto`.
    pub async fn bw(
        &self,
        peer: Option<&str>,
        proto: Option<&str>,
        poll: bool,
        interval: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<BandwidthStats, ApiError> {
        let request = BwRequest {
            peer: peer.map(str::to_string),
            proto: proto.map(str::to_string),
            poll,
            interval: interval.map(str::to_string),
        };
        self.client.call(&request, cancel).await
    }
}

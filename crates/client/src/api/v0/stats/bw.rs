use bytes::Bytes;
use serde::Deserialize;

use crate::api::client::{decode_plain, ApiError, ApiRequest, Call, Flags};

/// Report bandwidth usage, optionally narrowed to one peer or protocol.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BwRequest {
    /// Only count traffic with this peer
    #[arg(long)]
    pub peer: Option<String>,

    /// Only count traffic for this protocol
    #[arg(long)]
    pub proto: Option<String>,

    /// Keep printing stats every `interval`
    #[arg(long)]
    pub poll: bool,

    /// Polling interval, e.g. `1s`
    #[arg(long)]
    pub interval: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BandwidthStats {
    /// Bytes received
    pub total_in: u64,
    /// Bytes sent
    pub total_out: u64,
    /// Bytes per second
    pub rate_in: f64,
    pub rate_out: f64,
}

impl ApiRequest for BwRequest {
    type Response = BandwidthStats;

    fn build_call(&self) -> Result<Call, ApiError> {
        let flags = Flags::new()
            .with("peer", &self.peer)
            .with("proto", &self.proto)
            .with("poll", self.poll)
            .with("interval", &self.interval);
        Ok(Call::new("stats/bw").flags(flags))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_plain(&body)
    }
}

use bytes::Bytes;

use crate::api::client::{ApiError, ApiRequest, Call, Flags};

/// Output formats for the network diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum DiagVis {
    Text,
    D3,
    Dot,
}

impl DiagVis {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagVis::Text => "text",
            DiagVis::D3 => "d3",
            DiagVis::Dot => "dot",
        }
    }
}

/// Run a diagnostic across the network the node is part of.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NetRequest {
    /// How long to collect results, e.g. `20s`
    #[arg(long)]
    pub timeout: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub vis: Option<DiagVis>,
}

impl ApiRequest for NetRequest {
    type Response = Bytes;

    fn build_call(&self) -> Result<Call, ApiError> {
        let flags = Flags::new()
            .with("timeout", &self.timeout)
            .with("vis", self.vis.map(DiagVis::as_str));
        Ok(Call::new("diag/net").flags(flags))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        Ok(body)
    }
}

use clap::{Args, Subcommand};

use ipfs_rpc::api::v0::stats::BwRequest;
use ipfs_rpc::ApiError;

use crate::cli::op::{Op, OpContext};

crate::command_enum! {
    (Bw, BwRequest),
}

pub type StatsCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Stats {
    #[command(subcommand)]
    pub command: StatsCommand,
}

#[async_trait::async_trait]
impl Op for Stats {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for BwRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let bw = ctx.client.api().call(self, &ctx.cancel).await?;
        Ok(format!(
            "Bandwidth\nTotalIn: {} B\nTotalOut: {} B\nRateIn: {:.2} B/s\nRateOut: {:.2} B/s",
            bw.total_in, bw.total_out, bw.rate_in, bw.rate_out
        ))
    }
}

use clap::{Args, Subcommand};

use ipfs_rpc::api::v0::diag::NetRequest;
use ipfs_rpc::ApiError;

use crate::cli::op::{render, Op, OpContext};

crate::command_enum! {
    (Net, NetRequest),
}

pub type DiagCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Diag {
    #[command(subcommand)]
    pub command: DiagCommand,
}

#[async_trait::async_trait]
impl Op for Diag {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for NetRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(render(ctx.client.api().call(self, &ctx.cancel).await?))
    }
}

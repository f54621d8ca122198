use clap::{Args, Subcommand};

use ipfs_rpc::api::v0::refs::LocalRequest;
use ipfs_rpc::ApiError;

use crate::cli::op::{Op, OpContext};

crate::command_enum! {
    (Local, LocalRequest),
}

pub type RefsCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Refs {
    #[command(subcommand)]
    pub command: RefsCommand,
}

#[async_trait::async_trait]
impl Op for Refs {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for LocalRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let keys = ctx.client.refs().local(&ctx.cancel).await?;
        Ok(keys
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

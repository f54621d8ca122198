use clap::{Args, Subcommand};

use ipfs_rpc::api::v0::pin::{LsRequest, RmRequest};
use ipfs_rpc::ApiError;

use crate::cli::op::{Op, OpContext};

crate::command_enum! {
    (Ls, LsRequest),
    (Rm, RmRequest),
}

pub type PinCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Pin {
    #[command(subcommand)]
    pub command: PinCommand,
}

#[async_trait::async_trait]
impl Op for Pin {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for LsRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let pins = ctx.client.pin().ls(self.pin_type, &ctx.cancel).await?;
        Ok(pins
            .iter()
            .map(|pin| format!("{} {}", pin.hash, pin.kind))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[async_trait::async_trait]
impl Op for RmRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let unpinned = ctx
            .client
            .pin()
            .rm(&self.key, self.recursive, &ctx.cancel)
            .await?;
        Ok(unpinned
            .iter()
            .map(|hash| format!("unpinned {}", hash))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

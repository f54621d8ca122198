use clap::{Args, Subcommand};

use ipfs_rpc::api::v0::name::{PublishRequest, ResolveRequest};
use ipfs_rpc::ApiError;

use crate::cli::op::{Op, OpContext};

crate::command_enum! {
    (Publish, PublishRequest),
    (Resolve, ResolveRequest),
}

pub type NameCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Name {
    #[command(subcommand)]
    pub command: NameCommand,
}

#[async_trait::async_trait]
impl Op for Name {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for PublishRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let published = ctx.client.api().call(self, &ctx.cancel).await?;
        Ok(format!(
            "Published to {}: /ipfs/{}",
            published.name, published.value
        ))
    }
}

#[async_trait::async_trait]
impl Op for ResolveRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        ctx.client.api().call(self, &ctx.cancel).await
    }
}

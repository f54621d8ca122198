use clap::{Args, Subcommand};

use ipfs_rpc::api::v0::dht::{FindPeerRequest, FindProvsRequest, QueryRequest};
use ipfs_rpc::ApiError;

use crate::cli::op::{render, Op, OpContext};

crate::command_enum! {
    (Findpeer, FindPeerRequest),
    (Findprovs, FindProvsRequest),
    (Query, QueryRequest),
}

pub type DhtCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Dht {
    #[command(subcommand)]
    pub command: DhtCommand,
}

#[async_trait::async_trait]
impl Op for Dht {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

// dht results are ndjson event streams; print them as received

#[async_trait::async_trait]
impl Op for FindPeerRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(render(ctx.client.api().call(self, &ctx.cancel).await?))
    }
}

#[async_trait::async_trait]
impl Op for FindProvsRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(render(ctx.client.api().call(self, &ctx.cancel).await?))
    }
}

#[async_trait::async_trait]
impl Op for QueryRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(render(ctx.client.api().call(self, &ctx.cancel).await?))
    }
}

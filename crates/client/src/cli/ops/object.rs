use clap::{Args, Subcommand};

use ipfs_rpc::api::v0::object::{DataRequest, GetRequest, LinksRequest, PutRequest, StatRequest};
use ipfs_rpc::ApiError;

use crate::cli::op::{render, Op, OpContext};

crate::command_enum! {
    (Data, DataRequest),
    (Get, GetRequest),
    (Links, LinksRequest),
    (Put, PutRequest),
    (Stat, StatRequest),
}

pub type ObjectCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Object {
    #[command(subcommand)]
    pub command: ObjectCommand,
}

#[async_trait::async_trait]
impl Op for Object {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for DataRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let mut response = ctx
            .client
            .object()
            .data_stream(&self.key, self.encoding, &ctx.cancel)
            .await?;

        let mut data = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            tracing::trace!(len = chunk.len(), "object data chunk");
            data.extend_from_slice(&chunk);
        }
        Ok(render(data.into()))
    }
}

#[async_trait::async_trait]
impl Op for GetRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(render(ctx.client.api().call(self, &ctx.cancel).await?))
    }
}

#[async_trait::async_trait]
impl Op for LinksRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let links = ctx.client.api().call(self, &ctx.cancel).await?;
        Ok(links
            .links
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[async_trait::async_trait]
impl Op for PutRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(render(ctx.client.api().call(self, &ctx.cancel).await?))
    }
}

#[async_trait::async_trait]
impl Op for StatRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let stat = ctx.client.api().call(self, &ctx.cancel).await?;
        Ok(format!(
            "Hash: {}\nNumLinks: {}\nBlockSize: {}\nLinksSize: {}\nDataSize: {}\nCumulativeSize: {}",
            stat.hash,
            stat.num_links,
            stat.block_size,
            stat.links_size,
            stat.data_size,
            stat.cumulative_size
        ))
    }
}

use clap::{Args, Subcommand};

use ipfs_rpc::api::v0::bitswap::{StatRequest, UnwantRequest, WantlistRequest};
use ipfs_rpc::ApiError;

use crate::cli::op::{render, Op, OpContext};

crate::command_enum! {
    (Stat, StatRequest),
    (Unwant, UnwantRequest),
    (Wantlist, WantlistRequest),
}

pub type BitswapCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Bitswap {
    #[command(subcommand)]
    pub command: BitswapCommand,
}

#[async_trait::async_trait]
impl Op for Bitswap {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for StatRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let stat = ctx.client.bitswap().stat(&ctx.cancel).await?;

        let mut peers: Vec<String> = stat.peers.iter().map(ToString::to_string).collect();
        peers.sort();

        let mut lines = vec![
            "bitswap status".to_string(),
            format!("  provides buffer: {}", stat.provide_buf_len),
            format!("  blocks received: {}", stat.blocks_received),
            format!("  dup blocks received: {}", stat.dup_blks_received),
            format!("  dup data received: {}", stat.dup_data_received),
            format!("  wantlist [{} keys]", stat.wantlist.len()),
        ];
        lines.extend(stat.wantlist.iter().map(|key| format!("    {}", key)));
        lines.push(format!("  partners [{}]", peers.len()));
        lines.extend(peers.iter().map(|peer| format!("    {}", peer)));
        Ok(lines.join("\n"))
    }
}

#[async_trait::async_trait]
impl Op for UnwantRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(render(ctx.client.api().call(self, &ctx.cancel).await?))
    }
}

#[async_trait::async_trait]
impl Op for WantlistRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(render(ctx.client.api().call(self, &ctx.cancel).await?))
    }
}

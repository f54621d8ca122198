use clap::{Args, Subcommand};

use ipfs_rpc::api::v0::swarm::{AddrsRequest, PeersRequest};
use ipfs_rpc::ApiError;

use crate::cli::op::{Op, OpContext};

crate::command_enum! {
    (Addrs, AddrsRequest),
    (Peers, PeersRequest),
}

pub type SwarmCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Swarm {
    #[command(subcommand)]
    pub command: SwarmCommand,
}

#[async_trait::async_trait]
impl Op for Swarm {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for AddrsRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let book = ctx.client.swarm().addrs(&ctx.cancel).await?;

        let mut lines = Vec::new();
        for (peer, addrs) in &book {
            lines.push(format!("{} ({})", peer, addrs.len()));
            lines.extend(addrs.iter().map(|addr| format!("  {}", addr)));
        }
        Ok(lines.join("\n"))
    }
}

#[async_trait::async_trait]
impl Op for PeersRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let peers = ctx.client.swarm().peers(&ctx.cancel).await?;
        Ok(peers
            .iter()
            .map(|peer| format!("{}/p2p/{}", peer.addr, peer.peer))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

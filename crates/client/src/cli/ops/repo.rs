use clap::{Args, Subcommand};

use ipfs_rpc::api::v0::repo::GcRequest;
use ipfs_rpc::ApiError;

use crate::cli::op::{Op, OpContext};

crate::command_enum! {
    (Gc, GcRequest),
}

pub type RepoCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Repo {
    #[command(subcommand)]
    pub command: RepoCommand,
}

#[async_trait::async_trait]
impl Op for Repo {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for GcRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let removed = ctx.client.repo().gc(self.quiet, &ctx.cancel).await?;
        if removed.is_empty() {
            return Ok("Nothing to collect".to_string());
        }
        Ok(removed
            .iter()
            .map(|hash| format!("removed {}", hash))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

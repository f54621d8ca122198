use ipfs_rpc::api::v0::CommandsRequest;
use ipfs_rpc::ApiError;

#[async_trait::async_trait]
impl crate::cli::op::Op for CommandsRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let root = ctx.client.commands(&ctx.cancel).await?;
        Ok(root.paths().join("\n"))
    }
}

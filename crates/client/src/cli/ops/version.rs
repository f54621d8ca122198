use ipfs_rpc::api::v0::VersionRequest;
use ipfs_rpc::ApiError;

#[async_trait::async_trait]
impl crate::cli::op::Op for VersionRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let info = ctx.client.version(&ctx.cancel).await?;
        Ok(format!(
            "client: {} {}\ndaemon: {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            info
        ))
    }
}

use ipfs_rpc::api::v0::CatRequest;
use ipfs_rpc::ApiError;

use crate::cli::op::render;

#[async_trait::async_trait]
impl crate::cli::op::Op for CatRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let body = ctx.client.api().call(self, &ctx.cancel).await?;
        Ok(render(body))
    }
}

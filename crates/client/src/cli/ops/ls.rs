use ipfs_rpc::api::v0::{EntryKind, LsRequest};
use ipfs_rpc::ApiError;

#[async_trait::async_trait]
impl crate::cli::op::Op for LsRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let objects = ctx.client.api().call(self, &ctx.cancel).await?;

        let labelled = objects.len() > 1;
        let mut lines = Vec::new();
        for object in objects {
            if labelled {
                lines.push(format!("{}:", object.hash));
            }
            for entry in object.links {
                let suffix = if entry.kind == EntryKind::Directory {
                    "/"
                } else {
                    ""
                };
                lines.push(format!(
                    "{} {} {}{}",
                    entry.link.hash(),
                    entry.link.size,
                    entry.link.name,
                    suffix
                ));
            }
        }
        Ok(lines.join("\n"))
    }
}

use std::path::PathBuf;

use clap::Args;

use ipfs_rpc::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum AddError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Args, Debug, Clone)]
pub struct Add {
    /// File to upload
    pub path: PathBuf,

    /// Name to record instead of the file's own name
    #[arg(long)]
    pub name: Option<String>,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Add {
    type Error = AddError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let data = tokio::fs::read(&self.path).await.map_err(|source| AddError::Io {
            path: self.path.clone(),
            source,
        })?;

        let name = match &self.name {
            Some(name) => name.clone(),
            None => self
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        let hash = ctx.client.add(&name, data, &ctx.cancel).await?;
        Ok(format!("added {} {}", hash, name))
    }
}

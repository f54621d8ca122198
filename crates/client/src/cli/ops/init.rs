use clap::Args;
use url::Url;

use ipfs_rpc::{AppState, Config, StateError};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Daemon base URL to store in the config
    #[arg(long = "daemon", default_value = ipfs_rpc::config::DEFAULT_REMOTE)]
    pub daemon: Url,

    /// Overall per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Init {
    type Error = StateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = Config {
            timeout_secs: self.timeout_secs,
            ..Config::new(self.daemon.clone())
        };
        let state = AppState::init(ctx.config_path.clone(), Some(config))?;
        Ok(format!("Wrote {}", state.config_path.display()))
    }
}

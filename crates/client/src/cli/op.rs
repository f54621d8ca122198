use std::error::Error;
use std::path::PathBuf;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use url::Url;

use ipfs_rpc::{ApiError, AppState, Config, IpfsClient};

/// Resolve the client configuration.
///
/// Priority: explicit `--remote` flag > config file > built-in defaults.
pub fn resolve_config(explicit: Option<Url>, config_path: Option<PathBuf>) -> Config {
    let mut config = match AppState::load(config_path) {
        Ok(state) => state.config,
        Err(e) => {
            tracing::debug!("using default config: {}", e);
            Config::default()
        }
    };
    if let Some(remote) = explicit {
        config.remote = remote;
    }
    config
}


#[derive(Clone)]
pub struct OpContext {
    pub client: IpfsClient,
    /// Fired on Ctrl-C; every call made by an op observes it
    pub cancel: CancellationToken,
    /// Optional custom config path (defaults to ~/.ipfs-rpc)
    pub config_path: Option<PathBuf>,
}

impl OpContext {
    pub fn new(
        config: &Config,
        config_path: Option<PathBuf>,
        cancel: CancellationToken,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            client: IpfsClient::new(config)?,
            cancel,
            config_path,
        })
    }
}

/// Render a raw response body for the terminal.
pub fn render(body: Bytes) -> String {
    String::from_utf8_lossy(&body).trim_end().to_string()
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::cli::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::cli::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}

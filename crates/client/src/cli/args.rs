pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "ipfs-rpc")]
#[command(about = "Talk to an IPFS daemon over its HTTP RPC API")]
pub struct Args {
    /// Daemon base URL (defaults to the config file, then http://127.0.0.1:5001)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    /// Path to the config directory (defaults to ~/.ipfs-rpc)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: crate::Command,
}

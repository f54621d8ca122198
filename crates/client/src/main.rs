mod cli;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use cli::{
    args::Args, op::Op, Add, Bitswap, Dht, Diag, Init, Name, Object, Pin, Refs, Repo, Stats, Swarm,
};
use ipfs_rpc::api::v0::{CatRequest, CommandsRequest, LsRequest, VersionRequest};

command_enum! {
    (Commands, CommandsRequest),
    (Version, VersionRequest),
    (Ls, LsRequest),
    (Cat, CatRequest),
    (Add, Add),
    (Init, Init),
    (Bitswap, Bitswap),
    (Dht, Dht),
    (Diag, Diag),
    (Name, Name),
    (Object, Object),
    (Pin, Pin),
    (Refs, Refs),
    (Repo, Repo),
    (Stats, Stats),
    (Swarm, Swarm),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logging(args.log_level);

    // Resolve config: explicit flag > config file > defaults
    let config = cli::op::resolve_config(args.remote, args.config_path.clone());

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("received Ctrl-C, cancelling");
            ctrl_c.cancel();
        }
    });

    let ctx = match cli::op::OpContext::new(&config, args.config_path, cancel) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: Failed to create API client: {}", e);
            std::process::exit(1);
        }
    };

    match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so command output stays pipeable.
fn init_logging(log_level: tracing::Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}

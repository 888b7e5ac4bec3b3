use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use bucketset_server::{BucketSetServer, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "bucketset-server", about = "Bucket-sharded entry index server")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the configuration file.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    BucketSetServer::new(config).serve().await?;
    Ok(())
}

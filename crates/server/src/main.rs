#![deny(unsafe_code)]
//! logo-forge-server: serves the logo generation API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use logo_forge_server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "logo-forge-server", version, about = "Logo generation HTTP API")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind to (overrides the config file)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Batch size when a request omits `count`
    #[arg(long)]
    default_count: Option<usize>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn into_config(self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(count) = self.default_count {
            config.default_count = count;
        }
        if let Some(filter) = self.log_filter {
            config.log_filter = filter;
        }
        Ok(config.normalized())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Args::parse().into_config()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter.as_str().into()))
        .with(fmt::layer())
        .init();

    run_server(config).await
}

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sieve_proxy::{Proxy, ProxyConfig};

#[derive(Debug, Parser)]
#[command(name = "sieve-proxy-cli")]
struct Cli {
    #[arg(long = "config")]
    config: PathBuf,
}

fn main() -> Result<(), String> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sieve_proxy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ProxyConfig::load(&cli.config).map_err(|err| err.to_string())?;
    let proxy = Proxy::new(config).map_err(|err| err.to_string())?;
    proxy.run().map_err(|err| err.to_string())
}

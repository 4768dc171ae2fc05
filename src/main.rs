use std::net::SocketAddr;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use blog_api::{Config, DEFAULT_ADDR, Server, blog};

/// This is a blog API.
#[derive(Parser)]
#[command(name = "blog", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the blog server
    Start {
        /// Address to listen on
        #[arg(long, env = "BLOG_ADDR", default_value_t = DEFAULT_ADDR)]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_api=info,blog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Commands::Start { addr } => {
            info!(%addr, "starting the blog server");
            let config = Config::new(addr);
            Server::bind(config.addr)
                .serve(blog::app(&config))
                .await
                .with_context(|| format!("failed to serve on {addr}"))?;
        }
    }

    Ok(())
}

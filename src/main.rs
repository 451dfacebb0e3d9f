//! Stock price proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────┐
//!                        │                PRICE PROXY                 │
//!                        │                                            │
//!   GET /stock/v1/       │  ┌─────────┐   ┌──────────┐   ┌─────────┐ │
//!   get-price ───────────┼─▶│  http   │──▶│ request  │──▶│upstream │─┼──▶ Quote
//!                        │  │ server  │   │validation│   │ client  │ │    Provider
//!                        │  └─────────┘   └──────────┘   └────┬────┘ │
//!                        │                                     │      │
//!   JSON response        │  ┌─────────┐   ┌──────────┐        │      │
//!   ◀────────────────────┼──│response │◀──│ classify │◀───────┘      │
//!                        │  │ mapping │   │ outcome  │               │
//!                        │  └─────────┘   └──────────┘               │
//!                        │                                            │
//!                        │  config · observability · lifecycle        │
//!                        └───────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use price_proxy::config::{loader, ServiceConfig};
use price_proxy::http::HttpServer;
use price_proxy::lifecycle::{signals, Shutdown};
use price_proxy::observability::logging;

#[derive(Parser)]
#[command(name = "price-proxy")]
#[command(about = "HTTP proxy for stock price lookups", long_about = None)]
struct Cli {
    /// Path to a TOML config file; built-in defaults are used when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_host = %config.upstream.api_host,
        regions = %config.regions.supported.join(","),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    signals::spawn_ctrl_c_handler(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

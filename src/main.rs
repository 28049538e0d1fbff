//! Hotel Browser (v1)
//!
//! A small hotel-browsing web application built with Tokio, Axum and maud.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────────┐
//!                        │                  HOTEL BROWSER                    │
//!                        │                                                   │
//!   Browser request      │  ┌─────────┐    ┌─────────────┐    ┌──────────┐  │
//!   ─────────────────────┼─▶│  http   │───▶│ RouteTable  │───▶│  views   │  │
//!                        │  │ server  │    │ /hotels     │    │ List /   │  │
//!                        │  └─────────┘    │ /hotels/:id │    │ Detail   │  │
//!                        │                 │ / → /hotels │    └────┬─────┘  │
//!                        │                 └─────────────┘         │        │
//!                        │                                         ▼        │
//!   HTML response        │  ┌─────────┐                     ┌────────────┐  │     hotels.json
//!   ◀────────────────────┼──│ render  │◀────────────────────│ HotelStore │◀─┼──── (file / HTTP)
//!                        │  │ (maud)  │                     │ snapshot   │  │
//!                        │  └─────────┘                     └────────────┘  │
//!                        │                                                   │
//!                        │  config · observability · lifecycle               │
//!                        └──────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use hotel_browser::config::resolve_config;
use hotel_browser::http::HttpServer;
use hotel_browser::lifecycle::{signals, Shutdown};
use hotel_browser::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "hotel-browser")]
#[command(about = "Browse hotels from a JSON catalog", long_about = None)]
struct Args {
    /// Path to a TOML config file (falls back to HOTEL_BROWSER_CONFIG).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("hotel-browser v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        source_kind = ?config.source.kind,
        preload = config.source.preload,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

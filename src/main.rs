//! HTTP Forwarding Gateway
//!
//! A small edge service built with Tokio and Axum. It fronts two outbound
//! upstreams behind a fixed route table, with CORS, request IDs, and
//! metrics handled at the edge so the upstreams never see browser traffic
//! directly.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │               FORWARDING GATEWAY                 │
//!                      │                                                  │
//!     Client Request   │  ┌─────────┐    ┌─────────┐    ┌────────────┐    │
//!     ─────────────────┼─▶│  http   │───▶│ routes  │───▶│  handlers  │    │
//!                      │  │ server  │    │  table  │    └─────┬──────┘    │
//!                      │  └─────────┘    └─────────┘          │           │
//!                      │                                      ▼           │
//!                      │                               ┌────────────┐     │   Third-party API
//!     Client Response  │                               │  upstream  │─────┼─▶ Vercel Blob store
//!     ◀────────────────┼───────────────────────────────│ forwarders │     │
//!                      │                               └────────────┘     │
//!                      │                                                  │
//!                      │  ┌────────────────────────────────────────────┐  │
//!                      │  │           Cross-Cutting Concerns           │  │
//!                      │  │  ┌────────┐ ┌──────────┐ ┌─────────────┐   │  │
//!                      │  │  │ config │ │ security │ │ observa-    │   │  │
//!                      │  │  │        │ │  (CORS)  │ │ bility      │   │  │
//!                      │  │  └────────┘ └──────────┘ └─────────────┘   │  │
//!                      │  │  ┌──────────────────────────────────────┐  │  │
//!                      │  │  │    lifecycle (startup / shutdown)    │  │  │
//!                      │  │  └──────────────────────────────────────┘  │  │
//!                      │  └────────────────────────────────────────────┘  │
//!                      └──────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forward_gateway::config;
use forward_gateway::http::HttpServer;
use forward_gateway::lifecycle::Shutdown;
use forward_gateway::observability::metrics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Make .env values visible before the config loader runs.
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forward_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "forward-gateway starting");

    // Load configuration from the environment
    let config = config::load_from_env()?;

    // The blob credential itself never reaches the logs.
    tracing::info!(
        bind_address = %config.listener.bind_address,
        posts_base = %config.posts.base_url,
        cors_origins = ?config.cors.allowed_origins,
        blob_default_prefix = ?config.blobs.default_prefix,
        blob_token_configured = config.blobs.token.is_some(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Start metrics exporter when configured
    if let Some(metrics_address) = &config.observability.metrics_address {
        match metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

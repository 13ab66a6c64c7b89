//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Assemble shared application state (config, outbound client, blob
//!   capability)
//! - Wire up middleware (request ID, tracing, CORS, metrics)
//! - Bind the router to a listener and serve until shutdown
//!
//! # Design Decisions
//! - State is built once and cloned into handlers; nothing mutates after
//!   startup
//! - The blob capability is held as a trait object so tests substitute a
//!   fake without a network
//! - Middleware order: request IDs are minted before tracing so every log
//!   line carries one, and CORS sits close to the routes so preflights
//!   still get IDs and trace spans
//! - The panic guard is the innermost layer; a caught panic renders the
//!   uniform 500 envelope and flows back out through CORS and the
//!   request-id layers like any other response

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::error;
use crate::http::request::{request_id_header, MakeGatewayRequestId};
use crate::http::routes;
use crate::observability::metrics;
use crate::security::OriginPolicy;
use crate::upstream::{build_client, BlobStore, VercelBlobStore};

/// Errors assembling the gateway's outbound side at startup.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to build outbound HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid blob API base URL: {0}")]
    BlobApiBase(#[from] url::ParseError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub http: reqwest::Client,
    pub blobs: Arc<dyn BlobStore>,
}

impl AppState {
    /// Build the real state: one shared outbound client and the HTTP blob
    /// store speaking to the configured API base.
    pub fn from_config(config: GatewayConfig) -> Result<Self, BuildError> {
        let http = build_client()?;
        let blobs = Arc::new(VercelBlobStore::new(http.clone(), &config.blobs)?);
        Ok(Self {
            config: Arc::new(config),
            http,
            blobs,
        })
    }
}

/// HTTP server for the forwarding gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, BuildError> {
        Ok(Self::with_state(AppState::from_config(config)?))
    }

    /// Create a server around prepared state. Tests use this to substitute
    /// the blob capability.
    pub fn with_state(state: AppState) -> Self {
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let policy = OriginPolicy::new(&state.config.cors.allowed_origins);

        routes::build(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(
                        request_id_header(),
                        MakeGatewayRequestId,
                    ))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(request_id_header()))
                    .layer(policy.into_cors_layer())
                    .layer(CatchPanicLayer::custom(error::panic_response)),
            )
            .layer(axum::middleware::from_fn(metrics::track_requests))
    }

    /// The assembled router, for driving requests without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr: SocketAddr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for Ctrl+C or a coordinated shutdown notification.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutdown signal received"),
        _ = shutdown.recv() => tracing::info!("Coordinated shutdown requested"),
    }
}

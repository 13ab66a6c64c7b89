//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! Everything is resolved once at startup from the process environment and is
//! immutable afterwards; handlers receive it through shared state and never
//! read the environment themselves.

/// Root configuration for the forwarding gateway.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Cross-origin allow-list.
    pub cors: CorsConfig,

    /// Posts upstream (third-party JSON API).
    pub posts: PostsUpstreamConfig,

    /// Blob-storage listing upstream.
    pub blobs: BlobUpstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000"). Built from `PORT`.
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{}", default_port()),
        }
    }
}

/// Default listen port when `PORT` is unset.
pub fn default_port() -> u16 {
    5000
}

/// Cross-origin policy configuration.
///
/// `allowed_origins` is the parsed form of `CORS_ORIGINS`: entries trimmed,
/// empties dropped. A single `*` entry means every origin is allowed.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Posts upstream configuration.
#[derive(Debug, Clone)]
pub struct PostsUpstreamConfig {
    /// Base URL requests are forwarded to (`THIRD_PARTY_BASE`).
    /// `?id=<id>` appends `/<id>` to this value.
    pub base_url: String,

    /// Bound on one outbound call in seconds (`UPSTREAM_TIMEOUT_SECS`).
    pub timeout_secs: u64,
}

impl Default for PostsUpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com/posts".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Blob-storage listing upstream configuration.
///
/// `token` has no fallback beyond the environment: a request without a
/// resolvable credential is refused before any outbound call.
#[derive(Debug, Clone)]
pub struct BlobUpstreamConfig {
    /// Listing endpoint (`BLOB_API_BASE`).
    pub api_base: String,

    /// Prefix applied when the caller omits one (`BLOB_DEFAULT_PREFIX`).
    pub default_prefix: Option<String>,

    /// Credential applied when the caller omits one (`BLOB_TOKEN`).
    pub token: Option<String>,

    /// Bound on one listing call in seconds (`BLOB_TIMEOUT_SECS`).
    pub timeout_secs: u64,
}

impl Default for BlobUpstreamConfig {
    fn default() -> Self {
        Self {
            api_base: "https://blob.vercel-storage.com".to_string(),
            default_prefix: None,
            token: None,
            timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Prometheus exposition address (`METRICS_ADDR`); unset disables the
    /// exporter entirely.
    pub metrics_address: Option<String>,
}

//! Blob listing forwarder.
//!
//! # Responsibilities
//! - Resolve the listing prefix and credential from query and config
//! - Define the listing capability the gateway talks to
//! - Provide the HTTP implementation speaking the Vercel Blob list protocol
//!
//! # Design Decisions
//! - The capability is a trait object so tests can count calls without a
//!   network
//! - A present `token` query parameter shadows the configured environment
//!   credential, even when empty; there is no further fallback of any kind
//! - An empty resolved credential is refused before any outbound call

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::config::schema::BlobUpstreamConfig;
use crate::upstream::client::execute_json;
use crate::upstream::error::UpstreamError;

/// Resolve the listing prefix: query parameter, else configured default,
/// else empty. An explicitly empty query prefix is a valid value (lists
/// everything) and does not fall back.
pub fn resolve_prefix(query: Option<&str>, config: &BlobUpstreamConfig) -> String {
    match query {
        Some(prefix) => prefix.to_string(),
        None => config.default_prefix.clone().unwrap_or_default(),
    }
}

/// Resolve the credential: the query parameter when present (shadowing the
/// environment, even when empty), else the configured environment
/// credential. Returns `None` when the resolution is empty.
pub fn resolve_token(query: Option<&str>, config: &BlobUpstreamConfig) -> Option<String> {
    query
        .map(str::to_string)
        .or_else(|| config.token.clone())
        .filter(|token| !token.is_empty())
}

/// Listing capability the blob forwarder talks to.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// List blob metadata under `prefix`, authorized by `token`.
    ///
    /// The result object is relayed to the caller verbatim, so it stays an
    /// untyped JSON value here.
    async fn list(&self, prefix: &str, token: &str) -> Result<Value, UpstreamError>;
}

/// HTTP implementation against the Vercel Blob list endpoint.
pub struct VercelBlobStore {
    client: reqwest::Client,
    api_base: Url,
    timeout: Duration,
}

impl VercelBlobStore {
    pub fn new(
        client: reqwest::Client,
        config: &BlobUpstreamConfig,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            api_base: Url::parse(&config.api_base)?,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }
}

#[async_trait]
impl BlobStore for VercelBlobStore {
    async fn list(&self, prefix: &str, token: &str) -> Result<Value, UpstreamError> {
        let mut url = self.api_base.clone();
        if !prefix.is_empty() {
            url.query_pairs_mut().append_pair("prefix", prefix);
        }

        let reply = execute_json(
            self.client
                .get(url)
                .bearer_auth(token)
                .timeout(self.timeout),
        )
        .await?;

        Ok(reply.body)
    }
}

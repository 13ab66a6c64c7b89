//! Shared outbound HTTP client.
//!
//! # Responsibilities
//! - Build the one reqwest client both forwarders share
//! - Issue a prepared request and classify the outcome
//!
//! # Design Decisions
//! - 2xx with a JSON body is the only success; everything else becomes an
//!   UpstreamError carrying the upstream status when one exists
//! - Deadlines are set per request by the forwarders, not on the client,
//!   because the two upstreams have different bounds

use axum::http::StatusCode;
use serde_json::Value;

use crate::upstream::error::UpstreamError;

/// Status and JSON body relayed from an upstream.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Value,
}

/// Build the outbound client shared by all forwarders.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!("forward-gateway/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Issue one prepared outbound request and decode the JSON reply.
pub async fn execute_json(request: reqwest::RequestBuilder) -> Result<UpstreamReply, UpstreamError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(UpstreamError::Status { status });
    }

    let body = response.json::<Value>().await?;
    Ok(UpstreamReply { status, body })
}

//! Route handlers.
//!
//! # Responsibilities
//! - Answer the health probe from local state only
//! - Resolve each forwarding request into one outbound call and relay the
//!   outcome
//! - Answer unknown paths with the uniform envelope
//!
//! # Design Decisions
//! - Handlers stay thin: resolution logic lives in `upstream`, failure
//!   translation in `error`, so each handler reads as resolve / call / relay
//! - Success bodies are relayed verbatim as untyped JSON; the gateway never
//!   reshapes what an upstream returned

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::{ApiError, ErrorBody};
use crate::http::request::GatewayQuery;
use crate::http::server::AppState;
use crate::upstream::{blobs, posts};

/// Health probe answer.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    /// Milliseconds since the Unix epoch at the moment of the probe.
    pub timestamp: u64,
}

/// Milliseconds since the Unix epoch, 0 if the clock predates it.
fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}

/// `GET /health`. Answers from local state without touching any upstream.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        timestamp: epoch_millis(),
    })
}

#[derive(Debug, Deserialize)]
pub struct PostsQuery {
    pub id: Option<String>,
}

/// `GET /api/posts`. Forwards to the configured third-party base URL,
/// appending one path segment when `?id=` is present, and relays the
/// upstream's 2xx status and JSON body verbatim.
pub async fn forward_posts(
    State(state): State<AppState>,
    GatewayQuery(query): GatewayQuery<PostsQuery>,
) -> Result<Response, ApiError> {
    let target = posts::target_url(&state.config.posts.base_url, query.id.as_deref());
    let timeout = Duration::from_secs(state.config.posts.timeout_secs);

    let reply = posts::fetch(&state.http, &target, timeout)
        .await
        .map_err(ApiError::posts_failure)?;

    Ok((reply.status, Json(reply.body)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct BlobsQuery {
    pub prefix: Option<String>,
    pub token: Option<String>,
}

/// `GET /api/blobs`. Resolves prefix and credential from the query and
/// config, refuses with 400 before any outbound call when no credential
/// resolves, and relays the listing verbatim otherwise.
pub async fn forward_blobs(
    State(state): State<AppState>,
    GatewayQuery(query): GatewayQuery<BlobsQuery>,
) -> Result<Json<Value>, ApiError> {
    let prefix = blobs::resolve_prefix(query.prefix.as_deref(), &state.config.blobs);
    let token = blobs::resolve_token(query.token.as_deref(), &state.config.blobs)
        .ok_or(ApiError::MissingBlobToken)?;

    let listing = state
        .blobs
        .list(&prefix, &token)
        .await
        .map_err(ApiError::blob_failure)?;

    Ok(Json(listing))
}

/// Fallback for every path the route table does not name.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    tracing::warn!(method = %method, path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "Not found".to_string(),
            detail: Some(format!("no route for {} {}", method, uri.path())),
        }),
    )
        .into_response()
}

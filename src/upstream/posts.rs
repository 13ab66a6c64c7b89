//! Posts forwarder.
//!
//! Maps one inbound "list or get post" request to one outbound GET against
//! the configured third-party base URL and relays the outcome.

use std::time::Duration;

use crate::upstream::client::{execute_json, UpstreamReply};
use crate::upstream::error::UpstreamError;

/// Build the outbound target for a posts request.
///
/// No `id`, or an empty one, forwards to exactly the configured base URL.
/// Otherwise one path segment is appended; plain string append keeps the
/// base's own path intact (URL-join would resolve `/7` against the host
/// root).
pub fn target_url(base: &str, id: Option<&str>) -> String {
    match id.filter(|id| !id.is_empty()) {
        None => base.to_string(),
        Some(id) => format!("{}/{}", base.trim_end_matches('/'), id),
    }
}

/// Issue the single outbound attempt for a posts request.
pub async fn fetch(
    client: &reqwest::Client,
    target: &str,
    timeout: Duration,
) -> Result<UpstreamReply, UpstreamError> {
    execute_json(client.get(target).timeout(timeout)).await
}

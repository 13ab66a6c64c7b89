//! Upstream failure classification.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors from one outbound upstream call.
///
/// Both forwarders funnel their failures through this type so the caller
/// always sees the same envelope shape and status defaulting.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream did not answer within the configured bound.
    #[error("upstream request timed out")]
    Timeout,

    /// The upstream could not be reached at all.
    #[error("could not reach upstream: {0}")]
    Connect(String),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {status}")]
    Status { status: StatusCode },

    /// The upstream answered 2xx but the body was not JSON.
    #[error("upstream returned invalid JSON: {0}")]
    Decode(String),

    /// Anything else the outbound client reported.
    #[error("upstream request failed: {0}")]
    Other(String),
}

impl UpstreamError {
    /// The upstream's own status code, when the failure carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Status the gateway answers with: the upstream's when available,
    /// else 502 Bad Gateway.
    pub fn response_status(&self) -> StatusCode {
        self.status().unwrap_or(StatusCode::BAD_GATEWAY)
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else if e.is_connect() {
            UpstreamError::Connect(e.to_string())
        } else if let Some(status) = e.status() {
            UpstreamError::Status { status }
        } else if e.is_decode() {
            UpstreamError::Decode(e.to_string())
        } else {
            UpstreamError::Other(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_passthrough() {
        let err = UpstreamError::Status {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.response_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_statusless_failures_default_to_502() {
        assert_eq!(UpstreamError::Timeout.response_status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            UpstreamError::Connect("refused".into()).response_status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_timeout_detail_describes_a_timeout() {
        assert!(UpstreamError::Timeout.to_string().contains("timed out"));
    }
}

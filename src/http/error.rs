//! Failure translation into the wire envelope.
//!
//! # Responsibilities
//! - Define the uniform JSON error body every route answers with
//! - Map each failure class to its status, message, and optional detail
//! - Log each failure exactly once, at the translation point
//!
//! # Design Decisions
//! - Handlers return `Result<_, ApiError>` and never build error responses
//!   themselves, so the envelope shape cannot drift between routes
//! - The upstream's own status passes through when it has one; transport
//!   failures (timeout, refused connection) answer 502

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Wire shape of every non-success answer the gateway produces.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Failures a route handler can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Blob listing requested with no resolvable credential. Refused
    /// before any outbound call is made.
    #[error("missing blob token")]
    MissingBlobToken,

    /// The request's query string did not deserialize.
    #[error("invalid query string: {0}")]
    BadQuery(String),

    /// An outbound forward failed; `message` is the route's fixed
    /// headline and `source` carries what actually went wrong.
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: UpstreamError,
    },

    /// Anything that escaped the handlers. Internals stay out of the
    /// response body.
    #[error("unexpected server error: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// A posts forward that did not produce a relayable success.
    pub fn posts_failure(source: UpstreamError) -> Self {
        ApiError::Upstream {
            message: "Failed to fetch third-party data",
            source,
        }
    }

    /// A blob listing that did not produce a relayable success.
    pub fn blob_failure(source: UpstreamError) -> Self {
        ApiError::Upstream {
            message: "Failed to list blobs",
            source,
        }
    }
}

/// Render a panic caught at the middleware boundary as the unexpected
/// failure envelope. The payload reaches the log through the same
/// translation point as every other unexpected failure; the response body
/// stays opaque.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "opaque panic payload".to_string()
    };

    ApiError::Unexpected(detail).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingBlobToken => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Missing Vercel Blob token. Provide ?token= or set BLOB_TOKEN."
                        .to_string(),
                    detail: None,
                },
            ),
            ApiError::BadQuery(detail) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Invalid query parameters".to_string(),
                    detail: Some(detail),
                },
            ),
            ApiError::Upstream { message, source } => {
                let status = source.response_status();
                tracing::warn!(status = %status, error = %source, "{message}");
                (
                    status,
                    ErrorBody {
                        message: message.to_string(),
                        detail: Some(source.to_string()),
                    },
                )
            }
            ApiError::Unexpected(detail) => {
                tracing::error!(error = %detail, "Unexpected server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "Unexpected server error".to_string(),
                        detail: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_token_is_400_with_guidance() {
        let (status, body) = body_json(ApiError::MissingBlobToken.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Missing Vercel Blob token. Provide ?token= or set BLOB_TOKEN."
        );
        assert!(body.get("detail").is_none());
    }

    #[tokio::test]
    async fn test_upstream_status_passes_through() {
        let err = ApiError::posts_failure(UpstreamError::Status {
            status: StatusCode::NOT_FOUND,
        });
        let (status, body) = body_json(err.into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Failed to fetch third-party data");
        assert_eq!(body["detail"], "upstream returned status 404 Not Found");
    }

    #[tokio::test]
    async fn test_statusless_upstream_failure_is_502() {
        let err = ApiError::blob_failure(UpstreamError::Timeout);
        let (status, body) = body_json(err.into_response()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], "Failed to list blobs");
        assert_eq!(body["detail"], "upstream request timed out");
    }

    #[tokio::test]
    async fn test_unexpected_hides_internals() {
        let err = ApiError::Unexpected("stack details".to_string());
        let (status, body) = body_json(err.into_response()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Unexpected server error");
        assert!(body.get("detail").is_none());
    }

    #[tokio::test]
    async fn test_bad_query_is_400_with_the_problem() {
        let err = ApiError::BadQuery("duplicate field `id`".to_string());
        let (status, body) = body_json(err.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid query parameters");
        assert_eq!(body["detail"], "duplicate field `id`");
    }

    #[tokio::test]
    async fn test_panic_payloads_stay_out_of_the_body() {
        let (status, body) = body_json(panic_response(Box::new("boom"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Unexpected server error");
        assert!(body.get("detail").is_none());
    }
}

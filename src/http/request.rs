//! Inbound request plumbing.
//!
//! Every inbound request gets an `x-request-id` before anything else runs;
//! the same value is echoed on the response so one id ties together the
//! access log line and whatever the caller saw. Query strings come in
//! through an extractor whose rejection speaks the same envelope as every
//! other failure.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::{HeaderName, HeaderValue, Request};
use serde::de::DeserializeOwned;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::error::ApiError;

/// Header carrying the per-request id, inbound and outbound.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Header name form of [`X_REQUEST_ID`] for the id layers.
pub fn request_id_header() -> HeaderName {
    HeaderName::from_static(X_REQUEST_ID)
}

/// Query extractor whose rejection answers with the uniform envelope
/// instead of the transport library's plain-text default.
#[derive(Debug)]
pub struct GatewayQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for GatewayQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::BadQuery(rejection.body_text())),
        }
    }
}

/// Mints one random id per request.
#[derive(Debug, Clone, Default)]
pub struct MakeGatewayRequestId;

impl MakeRequestId for MakeGatewayRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_each_request_gets_a_fresh_id() {
        let mut maker = MakeGatewayRequestId;
        let request = Request::new(Body::empty());

        let first = maker.make_request_id(&request).unwrap();
        let second = maker.make_request_id(&request).unwrap();
        assert_ne!(first.header_value(), second.header_value());
    }

    #[tokio::test]
    async fn test_query_rejection_speaks_the_envelope() {
        #[derive(Debug, serde::Deserialize)]
        struct Sample {
            #[allow(dead_code)]
            id: Option<String>,
        }

        let (mut parts, _) = Request::get("/posts?id=1&id=2")
            .body(())
            .unwrap()
            .into_parts();

        let err = GatewayQuery::<Sample>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::BadQuery(ref detail) if detail.contains("duplicate")));
    }
}

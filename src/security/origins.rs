//! Origin policy guard.
//!
//! # Responsibilities
//! - Hold the parsed origin allow-list for the process lifetime
//! - Decide allow/reject per declared origin (pure predicate)
//! - Hand the decision to the CORS transport layer
//!
//! # Design Decisions
//! - A `*` entry in the allow-list admits every origin
//! - Matching is exact string comparison, scheme and port included
//! - The allowed origin is echoed back instead of a literal `*` so that
//!   credentialed browser requests stay valid

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Methods advertised to browsers, fixed regardless of which routes
/// actually use them.
const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];

/// Immutable origin policy derived from `CORS_ORIGINS`.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    origins: Vec<String>,
    allow_all: bool,
}

impl OriginPolicy {
    /// Build a policy from the configured allow-list.
    pub fn new(allowed: &[String]) -> Self {
        Self {
            allow_all: allowed.iter().any(|entry| entry == "*"),
            origins: allowed.to_vec(),
        }
    }

    /// Policy check for one declared origin.
    ///
    /// `None` means the caller declared no origin (same-origin or
    /// server-to-server) and is always allowed.
    pub fn allows(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allow_all || self.origins.iter().any(|entry| entry == origin),
        }
    }

    /// Build the transport-layer CORS guard around this policy.
    pub fn into_cors_layer(self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _request| match origin.to_str() {
                    Ok(origin) => self.allows(Some(origin)),
                    Err(_) => false,
                },
            ))
            .allow_methods(ALLOWED_METHODS)
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}

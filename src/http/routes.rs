//! Route table.
//!
//! # Responsibilities
//! - Declare every path the gateway serves, as data
//! - Assemble the table into the routing core with the uniform fallback
//!
//! # Design Decisions
//! - The table is built once at startup and frozen into the router;
//!   nothing rebinds paths at runtime
//! - Handlers carry no path knowledge; adding a route means adding one
//!   table entry

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::http::handlers;
use crate::http::server::AppState;

/// One declared route: a path and the method handlers bound to it.
pub struct RouteEntry {
    pub path: &'static str,
    pub handler: MethodRouter<AppState>,
}

/// Every route the gateway serves.
pub fn table() -> Vec<RouteEntry> {
    vec![
        RouteEntry {
            path: "/health",
            handler: get(handlers::health),
        },
        RouteEntry {
            path: "/api/posts",
            handler: get(handlers::forward_posts),
        },
        RouteEntry {
            path: "/api/blobs",
            handler: get(handlers::forward_blobs),
        },
    ]
}

/// Freeze the table into the routing core.
pub fn build(state: AppState) -> Router {
    table()
        .into_iter()
        .fold(Router::new(), |router, entry| {
            router.route(entry.path, entry.handler)
        })
        .fallback(handlers::not_found)
        .with_state(state)
}

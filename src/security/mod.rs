//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → origins.rs (declared origin checked against the allow-list)
//!     → allowed: pass to routing with CORS headers attached
//!     → disallowed: no allow header is emitted; the browser blocks the
//!       response, nothing from the handlers leaks out
//! ```
//!
//! # Design Decisions
//! - Policy is a pure predicate over immutable startup config
//! - Enforcement stays in the CORS transport layer, not in handlers
//! - Requests without a declared origin are trusted (same-origin or
//!   server-to-server callers)

pub mod origins;

pub use origins::OriginPolicy;

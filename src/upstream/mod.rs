//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound query
//!     → posts.rs / blobs.rs (pure resolver: query + config → outbound call)
//!     → client.rs (single bounded attempt, JSON decode)
//!     → UpstreamReply relayed verbatim
//!       | UpstreamError translated to the uniform envelope (http::error)
//! ```
//!
//! # Design Decisions
//! - One attempt per inbound call; nothing is retried
//! - Every outbound call has a deadline
//! - Both forwarders classify failures through the same UpstreamError so
//!   the envelope shape and 502 defaulting never drift between routes
//! - The blob listing capability is a trait; tests substitute a counting fake

pub mod blobs;
pub mod client;
pub mod error;
pub mod posts;

pub use blobs::{BlobStore, VercelBlobStore};
pub use client::{build_client, UpstreamReply};
pub use error::UpstreamError;

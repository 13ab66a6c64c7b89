//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every inbound request:
//!     → trace span (tower-http, request ID attached)
//!     → metrics.rs (counter + latency histogram per method/route/status)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured log events carry the request ID minted at the edge
//! - Metric labels use route patterns, keeping cardinality bounded
//! - The exporter is opt-in; recording without one installed is a no-op

pub mod metrics;

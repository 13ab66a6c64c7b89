//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env loaded in main)
//!     → loader.rs (lookup & parse each variable)
//!     → validation.rs (semantic checks, all errors collected)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Every field has a default so an empty environment still runs
//! - Handlers receive config through state, never through ambient reads
//! - The loader takes an injected lookup so tests never touch the real
//!   environment

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, ConfigError};
pub use schema::GatewayConfig;

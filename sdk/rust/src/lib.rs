//! Rust client SDK for the HTTP forwarding gateway.

pub mod client;

pub use client::{GatewayClient, HealthReply};

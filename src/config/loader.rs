//! Configuration loading from the process environment.

use std::env;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable names understood by the gateway.
pub mod vars {
    pub const PORT: &str = "PORT";
    pub const THIRD_PARTY_BASE: &str = "THIRD_PARTY_BASE";
    pub const CORS_ORIGINS: &str = "CORS_ORIGINS";
    pub const BLOB_DEFAULT_PREFIX: &str = "BLOB_DEFAULT_PREFIX";
    pub const BLOB_TOKEN: &str = "BLOB_TOKEN";
    pub const BLOB_API_BASE: &str = "BLOB_API_BASE";
    pub const UPSTREAM_TIMEOUT_SECS: &str = "UPSTREAM_TIMEOUT_SECS";
    pub const BLOB_TIMEOUT_SECS: &str = "BLOB_TIMEOUT_SECS";
    pub const METRICS_ADDR: &str = "METRICS_ADDR";
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was present but could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    /// The assembled configuration failed semantic validation.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the process environment.
pub fn load_from_env() -> Result<GatewayConfig, ConfigError> {
    load_with(|var| env::var(var).ok())
}

/// Load configuration through an explicit variable lookup.
///
/// Tests feed a map here instead of mutating the process environment, which
/// keeps config tests runnable in parallel.
pub fn load_with<F>(lookup: F) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = GatewayConfig::default();

    if let Some(port) = nonblank(&lookup, vars::PORT) {
        let port: u16 = port.parse().map_err(|e| ConfigError::Invalid {
            var: vars::PORT,
            reason: format!("{e}"),
        })?;
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }

    if let Some(base) = nonblank(&lookup, vars::THIRD_PARTY_BASE) {
        config.posts.base_url = base;
    }

    if let Some(raw) = lookup(vars::CORS_ORIGINS) {
        // A blank variable keeps the wildcard default; any non-blank value
        // is authoritative, even when it parses to zero entries.
        if !raw.trim().is_empty() {
            config.cors.allowed_origins = parse_origins(&raw);
        }
    }

    if let Some(prefix) = lookup(vars::BLOB_DEFAULT_PREFIX) {
        config.blobs.default_prefix = Some(prefix);
    }

    if let Some(token) = nonblank(&lookup, vars::BLOB_TOKEN) {
        config.blobs.token = Some(token);
    }

    if let Some(base) = nonblank(&lookup, vars::BLOB_API_BASE) {
        config.blobs.api_base = base;
    }

    if let Some(secs) = nonblank(&lookup, vars::UPSTREAM_TIMEOUT_SECS) {
        config.posts.timeout_secs = parse_secs(vars::UPSTREAM_TIMEOUT_SECS, &secs)?;
    }

    if let Some(secs) = nonblank(&lookup, vars::BLOB_TIMEOUT_SECS) {
        config.blobs.timeout_secs = parse_secs(vars::BLOB_TIMEOUT_SECS, &secs)?;
    }

    if let Some(addr) = nonblank(&lookup, vars::METRICS_ADDR) {
        config.observability.metrics_address = Some(addr);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Split a comma-separated allow-list, trimming entries and dropping empties.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn nonblank<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_secs(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse().map_err(|e| ConfigError::Invalid {
        var,
        reason: format!("{e}"),
    })
}

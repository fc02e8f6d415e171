//! Host configuration from the Leptos manifest metadata and environment.
//!
//! Leptos options (site root, pkg dir, site address) come from
//! `[[workspace.metadata.leptos]]` or the `LEPTOS_*` variables cargo-leptos
//! exports. Optional overrides:
//! - `PORT`: replaces the port of the configured site address
//! - `ECOLEARN_COMPRESSION`: gzip responses, default on

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::config::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub compression: bool,
    pub leptos_options: LeptosOptions,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        Self::with_overrides(
            conf.leptos_options,
            std::env::var("PORT").ok().as_deref(),
            env_bool("ECOLEARN_COMPRESSION"),
        )
    }

    /// Apply the raw `PORT` and compression overrides on top of Leptos options.
    pub fn with_overrides(
        leptos_options: LeptosOptions,
        port: Option<&str>,
        compression: Option<bool>,
    ) -> Result<Self, ConfigError> {
        let mut addr = leptos_options.site_addr;
        if let Some(port) = parse_port(port)? {
            addr.set_port(port);
        }

        Ok(Self { addr, compression: compression.unwrap_or(true), leptos_options })
    }
}

/// Parse an optional port override. Blank values count as unset.
pub(crate) fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<u16>().map(Some).map_err(|_| ConfigError::InvalidPort(raw.to_owned()))
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().and_then(|raw| parse_bool(&raw))
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

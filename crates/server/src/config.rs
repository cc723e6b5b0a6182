//! Server configuration: defaults, optional TOML file, CLI overrides.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use logo_forge_core::generator::{BatchSize, DEFAULT_BATCH};

/// Runtime settings for the HTTP server.
///
/// Every field is optional in the TOML file:
///
/// ```toml
/// bind = "127.0.0.1:3001"
/// default_count = 9
/// log_filter = "info,tower_http=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: SocketAddr,
    /// Batch size used when a request omits `count` or sends 0.
    pub default_count: usize,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3001)),
            default_count: DEFAULT_BATCH,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse server config")?;
        Ok(config.normalized())
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Clamps `default_count` into the allowed batch range.
    pub fn normalized(mut self) -> Self {
        self.default_count = BatchSize::resolve_with_default(None, self.default_count).get();
        self
    }
}

//! Configuration loading for Stitchwise.
//! Reads stitchwise.toml from the current directory or path in STITCHWISE_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;
use stitchwise_common::{Result, StitchwiseError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String { "http://127.0.0.1:5000".to_string() }
fn default_timeout_secs() -> u64 { 120 }

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout_secs() }
    }
}


impl Config {
    /// Load configuration from stitchwise.toml.
    /// Checks STITCHWISE_CONFIG env var first, then current directory.
    /// A missing file yields the built-in defaults — nothing in the config
    /// is mandatory.
    pub fn load() -> Result<Self> {
        let path = std::env::var("STITCHWISE_CONFIG")
            .unwrap_or_else(|_| "stitchwise.toml".to_string());

        if !Path::new(&path).exists() {
            tracing::warn!("Config file not found: {}; using built-in defaults", path);
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|err| StitchwiseError::Config(format!("failed to read {path}: {err}")))?;
        let config: Config = toml::from_str(&content)
            .map_err(|err| StitchwiseError::Config(format!("invalid {path}: {err}")))?;
        Ok(config)
    }
}

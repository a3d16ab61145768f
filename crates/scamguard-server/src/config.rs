//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the configuration file (extension resolved by `config`)
pub const DEFAULT_CONFIG_FILE: &str = "config/server";

/// Report source for the analysis endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceType {
    /// Built-in demonstration reports
    #[default]
    Memory,
    /// JSON or YAML report file, re-read on every request
    File {
        /// Path to the report file
        path: PathBuf,
    },
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Report source configuration
    pub source: SourceType,

    /// Log level
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            source: SourceType::default(),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from the given file (optional) and `SCAMGUARD_*`
    /// environment variables. Nested keys use `__`, e.g. `SCAMGUARD_SOURCE__TYPE`.
    pub fn load_from(file: &str) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("SCAMGUARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build config: {}", e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }
}

//! Tool configuration with TOML file support.

use paysplit_types::{AccountId, Asset, ChainParams};
use paysplit_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("invalid configuration: {0}")]
    Parse(String),

    #[error("cannot serialize configuration: {0}")]
    Serialize(String),
}

/// An account that exists before the first operation is replayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    pub id: AccountId,
    #[serde(default)]
    pub balances: Vec<Asset>,
}

/// Configuration for the `paysplit` tool.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; every field has
/// a default so an empty file is valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log output format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// `EnvFilter` directive, e.g. "info" or "warn,paysplit_engine=debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Fee schedule and automatic payout fee.
    #[serde(default)]
    pub params: ChainParams,

    /// Accounts funded before replay.
    #[serde(default)]
    pub accounts: Vec<GenesisAccount>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            params: ChainParams::genesis_defaults(),
            accounts: Vec::new(),
        }
    }
}

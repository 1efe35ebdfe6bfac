//! Runtime configuration for core consumers.
//!
//! # Responsibility
//! - Resolve logging and catalog bootstrap settings from the environment.
//! - Keep defaults in one place for CLI and adapter wiring.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults.
//! - Unparseable values are rejected, never silently ignored.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "EXCURSION_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "EXCURSION_LOG_DIR";
pub const ENV_SEED_DEFAULTS: &str = "EXCURSION_SEED_DEFAULTS";

/// Core runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Whether to create the starter catalog at startup.
    pub seed_defaults: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_defaults: false,
        }
    }
}

impl CoreConfig {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through a caller-provided variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(level) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.log_level = level;
        }
        if let Some(dir) = non_blank(lookup(ENV_LOG_DIR)) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = non_blank(lookup(ENV_SEED_DEFAULTS)) {
            config.seed_defaults = parse_flag(ENV_SEED_DEFAULTS, &raw)?;
        }

        Ok(config)
    }
}

/// Configuration resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value `{value}` for `{key}`")
            }
        }
    }
}

impl Error for ConfigError {}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

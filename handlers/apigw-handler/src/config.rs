//! Application configuration

use std::env;

/// Environment variable naming the destination table
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Errors raised while reading configuration at startup
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Process-wide configuration, resolved once before the first request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Table every record is written to
    pub table_name: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup(TABLE_NAME_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVar(TABLE_NAME_VAR))?;

        Ok(Self { table_name })
    }
}

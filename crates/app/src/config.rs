//! Process configuration, read from the environment.

use thiserror::Error;

use minibank_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "MINIBANK_LOG_FORMAT";
pub const DUMP_FORMAT_VAR: &str = "MINIBANK_DUMP_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// How the final account dump is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DumpFormat {
    /// `=== Accounts ===` header and `<key> | <balance>` lines.
    #[default]
    Table,
    /// Pretty JSON array of account snapshots.
    Json,
}

impl DumpFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Some(DumpFormat::Table),
            "json" => Some(DumpFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    pub dump_format: DumpFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => LogFormat::parse(&value).ok_or(ConfigError::InvalidValue {
                key: LOG_FORMAT_VAR,
                value,
            })?,
            None => LogFormat::default(),
        };

        let dump_format = match lookup(DUMP_FORMAT_VAR) {
            Some(value) => DumpFormat::parse(&value).ok_or(ConfigError::InvalidValue {
                key: DUMP_FORMAT_VAR,
                value,
            })?,
            None => DumpFormat::default(),
        };

        Ok(Self {
            log_format,
            dump_format,
        })
    }
}

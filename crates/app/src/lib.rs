//! `minibank-app`: configuration and the demonstration sequence behind the
//! `minibank` binary.

pub mod config;
pub mod demo;

pub use config::{AppConfig, ConfigError, DumpFormat};

//! Infrastructure layer with configuration and id generation adapters.

/// Application configuration.
pub mod config;
/// Task id generators.
pub mod ids;

pub use config::{
    AppConfig, CliArgs, ConfigError, IdSource, LoadStatus, LoadedConfig, LogLevel, StorageManager,
};
pub use ids::{ClockIds, SequentialIds, id_generator};

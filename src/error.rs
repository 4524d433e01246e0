//! Error types for catalog and configuration loading.
//!
//! Classification itself never fails; these only surface at startup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the events catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read events file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid events JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate event id {0:?}")]
    DuplicateId(String),

    #[error("event {0:?} has an empty title")]
    EmptyTitle(String),
}

/// Errors raised while loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown theme preset {0:?}")]
    UnknownPreset(String),
}

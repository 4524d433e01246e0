//! Tracing setup.
//!
//! The UI owns the terminal, so interactive runs log to a daily rolling file.
//! `--list` runs log to stderr instead.

use std::io;
use std::path::PathBuf;

use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    /// Write to rolling files here; stderr when `None`.
    pub log_directory: Option<PathBuf>,
    pub log_file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_directory: None,
            log_file_prefix: "club-tui.log".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_file_logging(mut self, directory: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// `RUST_LOG` wins when set; otherwise this crate at the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                self.level
            ))
        })
    }

    /// Install the global subscriber. Keep the returned guard alive until exit
    /// so buffered file output is flushed.
    pub fn init(self) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
        let registry = Registry::default().with(self.env_filter());

        let guard = match &self.log_directory {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                let appender = rolling::daily(dir, &self.log_file_prefix);
                let (writer, guard) = non_blocking(appender);
                registry
                    .with(fmt::layer().with_writer(writer).with_ansi(false))
                    .try_init()?;
                Some(guard)
            }
            None => {
                registry.with(fmt::layer().with_writer(io::stderr)).try_init()?;
                None
            }
        };

        info!(level = %self.level, directory = ?self.log_directory, "logging initialized");
        Ok(guard)
    }
}

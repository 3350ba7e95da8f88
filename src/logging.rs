//! Logging and tracing configuration
//!
//! Centralized `tracing` subscriber setup for the binary and for embedding
//! applications. Library code only emits events; installing a subscriber is
//! always the caller's decision.

use std::io;
use tracing::Level;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the crate
    pub level: Level,
    /// Whether to emit JSON instead of the pretty console format
    pub json_format: bool,
    /// Log file directory; console-only when `None`
    pub log_directory: Option<String>,
    /// Log file prefix for rolling file output
    pub log_file_prefix: String,
    /// Whether to use ANSI colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter overriding the level
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_directory: None,
            log_file_prefix: "floorgraph".to_string(),
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable rolling file logging in the given directory
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set a custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Install the global tracing subscriber
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = match &self.env_filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!(
                    "{}={}",
                    env!("CARGO_PKG_NAME").replace('-', "_"),
                    self.level
                ))
            }),
        };
        let registry = Registry::default().with(env_filter);

        match &self.log_directory {
            Some(dir) => {
                let appender = rolling::daily(dir, &self.log_file_prefix);
                let (file_writer, guard) = non_blocking(appender);
                // The guard must outlive the process for buffered lines to flush
                std::mem::forget(guard);

                let file_layer = fmt::layer().json().with_writer(file_writer);
                if self.json_format {
                    let console = fmt::layer().json().with_writer(io::stderr);
                    registry.with(file_layer).with(console).try_init()?;
                } else {
                    let console = fmt::layer()
                        .pretty()
                        .with_writer(io::stderr)
                        .with_ansi(self.enable_ansi);
                    registry.with(file_layer).with(console).try_init()?;
                }
            }
            None => {
                if self.json_format {
                    let console = fmt::layer().json().with_writer(io::stderr);
                    registry.with(console).try_init()?;
                } else {
                    let console = fmt::layer()
                        .pretty()
                        .with_writer(io::stderr)
                        .with_ansi(self.enable_ansi);
                    registry.with(console).try_init()?;
                }
            }
        }

        Ok(())
    }

    /// Initialize verbose logging (INFO level)
    pub fn init_verbose() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::INFO).init()
    }

    /// Initialize debug logging (DEBUG level)
    pub fn init_debug() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::DEBUG).init()
    }

    /// Initialize minimal logging for tests (WARN level, no colors)
    pub fn init_test() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::WARN).without_ansi().init()
    }
}

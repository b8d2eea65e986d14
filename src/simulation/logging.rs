//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the simulator.
//! All log output goes to stderr (and optionally a rolling file) so that command
//! results written to stdout stay clean.

use crate::types::CliArgs;
use std::io;
use tracing::{info, Level};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Boxed error returned by logging initialization
pub type LoggingInitError = Box<dyn std::error::Error + Send + Sync>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting
    pub json_format: bool,
    /// Whether to log to file
    pub log_to_file: bool,
    /// Log file directory (if logging to file)
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_to_file: false,
            log_directory: None,
            log_file_prefix: "smart-office".to_string(),
            enable_span_events: false,
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

    /// Enable file logging
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_to_file = true;
        self.log_directory = Some(directory.into());
        self
    }

    /// Set log file prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Default filter directive covering the library and the binary
    fn default_directive(&self) -> String {
        let library = env!("CARGO_PKG_NAME").replace('-', "_");
        format!("{}={},smart_office={}", library, self.level, self.level)
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// When file logging is enabled the returned guard must be held for the
    /// lifetime of the process, otherwise buffered lines are lost on exit.
    pub fn init(self) -> Result<Option<WorkerGuard>, LoggingInitError> {
        let env_filter = if let Some(filter) = &self.env_filter {
            EnvFilter::try_new(filter)?
        } else {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
        };

        let registry = Registry::default().with(env_filter);

        let guard = if self.log_to_file {
            let log_dir = self.log_directory.as_deref().unwrap_or("logs");
            let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
            let (file_writer, guard) = non_blocking(file_appender);

            let file_layer = fmt::layer()
                .json()
                .with_writer(file_writer)
                .with_span_events(self.span_events());

            if self.json_format {
                let console_layer = fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events());
                registry.with(file_layer).with(console_layer).try_init()?;
            } else {
                let console_layer = fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_ansi(self.enable_ansi)
                    .with_span_events(self.span_events());
                registry.with(file_layer).with(console_layer).try_init()?;
            }

            Some(guard)
        } else {
            if self.json_format {
                let layer = fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events());
                registry.with(layer).try_init()?;
            } else {
                let layer = fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_ansi(self.enable_ansi)
                    .with_span_events(self.span_events());
                registry.with(layer).try_init()?;
            }

            None
        };

        info!(level = %self.level, json = self.json_format, file = self.log_to_file, "Logging initialized");
        Ok(guard)
    }

    /// Build the logging configuration requested on the command line
    ///
    /// Warnings only by default, INFO with `--verbose`, DEBUG plus span
    /// events with `--debug`.
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let mut config = if args.debug {
            Self::new().with_level(Level::DEBUG).with_span_events()
        } else if args.verbose {
            Self::new().with_level(Level::INFO)
        } else {
            Self::new().with_level(Level::WARN)
        };

        if args.log_json {
            config = config.with_json_format();
        }
        if let Some(directory) = &args.log_dir {
            config = config.with_file_logging(directory.clone());
        }
        config
    }
}

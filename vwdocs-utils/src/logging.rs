//! Logging infrastructure for vwdocs
//!
//! Provides unified logging setup using the tracing ecosystem. The bridge
//! owns stdout as its protocol channel, so diagnostics go to stderr or to
//! a log file, never to stdout.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::{paths, BridgeError, Result};

/// Log output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Log to stderr
    Stderr,
    /// Log to file
    File,
    /// Log to both stderr and file
    Both,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output destination
    pub output: LogOutput,
    /// Log level filter (e.g., "info", "vwdocs_bridge=debug,tokio=warn")
    pub filter: String,
    /// Include span events (enter/exit)
    pub span_events: bool,
    /// Include file/line in logs
    pub file_line: bool,
    /// Optional custom log file name (defaults to "vwdocs-bridge.log")
    pub file_name: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output: LogOutput::Stderr,
            filter: "info".into(),
            span_events: false,
            file_line: false,
            file_name: None,
        }
    }
}

impl LogConfig {
    /// Create config for the bridge process.
    ///
    /// Filter comes from `VWDOCS_LOG` (default "info"). Setting
    /// `VWDOCS_LOG_FILE` redirects output to the XDG log directory, for
    /// MCP hosts that swallow stderr.
    pub fn bridge() -> Self {
        let to_file = std::env::var_os("VWDOCS_LOG_FILE").is_some();
        Self {
            output: if to_file {
                LogOutput::File
            } else {
                LogOutput::Stderr
            },
            filter: std::env::var("VWDOCS_LOG").unwrap_or_else(|_| "info".into()),
            span_events: false,
            file_line: false,
            file_name: None,
        }
    }

    /// Create config for development (verbose stderr)
    pub fn development() -> Self {
        Self {
            output: LogOutput::Stderr,
            filter: "debug".into(),
            span_events: true,
            file_line: true,
            file_name: None,
        }
    }
}

/// Initialize logging with default configuration
pub fn init_logging() -> Result<()> {
    init_logging_with_config(LogConfig::default())
}

/// Initialize logging with custom configuration
pub fn init_logging_with_config(config: LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| BridgeError::config(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    let fmt_layer = if config.span_events {
        fmt_layer.with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    } else {
        fmt_layer
    };

    let fmt_layer = if config.file_line {
        fmt_layer.with_file(true).with_line_number(true)
    } else {
        fmt_layer.with_file(false).with_line_number(false)
    };

    let file_name = config.file_name.as_deref().unwrap_or("vwdocs-bridge.log");

    match config.output {
        LogOutput::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| BridgeError::internal(format!("Failed to init logging: {}", e)))?;
        }
        LogOutput::File => {
            let file = open_log_file(file_name)?;

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.with_writer(file).with_ansi(false))
                .try_init()
                .map_err(|e| BridgeError::internal(format!("Failed to init logging: {}", e)))?;
        }
        LogOutput::Both => {
            let file = open_log_file(file_name)?;

            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.with_writer(std::io::stderr))
                .with(file_layer)
                .try_init()
                .map_err(|e| BridgeError::internal(format!("Failed to init logging: {}", e)))?;
        }
    }

    Ok(())
}

fn open_log_file(file_name: &str) -> Result<std::fs::File> {
    let log_dir = paths::log_dir();
    std::fs::create_dir_all(&log_dir).map_err(|e| BridgeError::FileWrite {
        path: log_dir.clone(),
        source: e,
    })?;

    let log_path = log_dir.join(file_name);
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| BridgeError::FileWrite {
            path: log_path,
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_stderr_info() {
        let config = LogConfig::default();
        assert_eq!(config.output, LogOutput::Stderr);
        assert_eq!(config.filter, "info");
        assert!(!config.span_events);
        assert!(!config.file_line);
        assert!(config.file_name.is_none());
    }

    #[test]
    fn test_development_config_is_verbose() {
        let config = LogConfig::development();
        assert_eq!(config.output, LogOutput::Stderr);
        assert_eq!(config.filter, "debug");
        assert!(config.span_events);
        assert!(config.file_line);
    }

    #[test]
    fn test_bridge_config_never_targets_stdout() {
        // Whatever the env says, the protocol channel stays clean.
        let config = LogConfig::bridge();
        assert!(matches!(config.output, LogOutput::Stderr | LogOutput::File));
    }

    #[test]
    fn test_log_output_equality() {
        assert_eq!(LogOutput::Stderr, LogOutput::Stderr);
        assert_ne!(LogOutput::Stderr, LogOutput::File);
        assert_ne!(LogOutput::File, LogOutput::Both);
    }

    #[test]
    fn test_invalid_filter_is_config_error() {
        let config = LogConfig {
            filter: "vwdocs=notalevel".into(),
            ..Default::default()
        };
        let result = init_logging_with_config(config);
        assert!(matches!(result, Err(BridgeError::Config(_))));
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_STATE_HOME", dir.path());

        let file = open_log_file("test.log");
        assert!(file.is_ok());

        std::env::remove_var("XDG_STATE_HOME");
    }
}

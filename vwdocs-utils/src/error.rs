//! Error types for vwdocs
//!
//! Provides a unified error type used across the vwdocs crates.

use std::path::PathBuf;

/// Main error type for vwdocs operations
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    // === IO Errors ===

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Configuration Errors ===

    #[error("Configuration error: {0}")]
    Config(String),

    // === Internal Errors ===

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using BridgeError
pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = BridgeError::Io(io_err);
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_display_file_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = BridgeError::FileWrite {
            path: PathBuf::from("/var/log/vwdocs.log"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to write file"));
        assert!(msg.contains("/var/log/vwdocs.log"));
    }

    #[test]
    fn test_error_display_config() {
        let err = BridgeError::config("invalid log filter");
        assert_eq!(err.to_string(), "Configuration error: invalid log filter");
    }

    #[test]
    fn test_error_display_internal() {
        let err = BridgeError::internal("logging already initialized");
        assert_eq!(
            err.to_string(),
            "Internal error: logging already initialized"
        );
    }

    #[test]
    fn test_io_error_from_conversion() {
        fn returns_io_error() -> Result<()> {
            let _ = std::fs::File::open("/nonexistent/vwdocs")?;
            Ok(())
        }
        assert!(matches!(returns_io_error(), Err(BridgeError::Io(_))));
    }
}

//! vwdocs-utils: Common utilities for the vwdocs bridge
//!
//! Provides the unified error type, tracing-based logging setup, and
//! path helpers shared across the workspace.

pub mod error;
pub mod logging;
pub mod paths;

pub use error::{BridgeError, Result};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogOutput};

//! vwdocs-bridge - stdio MCP server for the Vectorworks docs backend
//!
//! Exposes a stdio-based MCP server to clients that expect one (Claude
//! Desktop, VS Code extensions) and relays tool calls to the WebSocket
//! documentation backend, surviving backend restarts transparently.

use tracing::{info, warn};

use vwdocs_utils::{init_logging_with_config, BridgeError, LogConfig, Result};

mod bridge;
mod connection;
mod error;
mod responder;
mod socket;

use bridge::McpBridge;

/// Fixed backend address; the backend always runs next to the bridge
const BACKEND_URL: &str = "ws://localhost:8765";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging_with_config(LogConfig::bridge())?;

    let mut bridge = McpBridge::new(BACKEND_URL);

    tokio::select! {
        result = bridge.run() => {
            result.map_err(|e| BridgeError::internal(e.to_string()))?;
        }
        _ = shutdown_signal() => {
            info!("termination signal received, shutting down");
            bridge.shutdown();
        }
    }

    Ok(())
}

/// Resolve when SIGINT or SIGTERM arrives
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(sig) => sig,
        Err(e) => {
            warn!(error = %e, "failed to install SIGTERM handler");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

//! MCP Bridge - stdio front end, WebSocket back end
//!
//! Reads JSON-RPC requests line by line from stdin, answers session-setup
//! requests locally, forwards tool invocations to the backend, and relays
//! every backend message to stdout untouched.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use vwdocs_protocol::{JsonRpcRequest, JsonRpcResponse};

use crate::connection::{ConnectionManager, Dispatch, SocketEvent};
use crate::error::McpError;
use crate::responder::{self, LocalOutcome};

/// Global request counter for correlating log records within this bridge instance
static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// MCP Bridge
///
/// Connects to the documentation backend and handles MCP protocol
/// communication over stdio.
pub struct McpBridge {
    connection: ConnectionManager,
}

impl McpBridge {
    /// Create a new bridge against the given backend address
    pub fn new(backend_url: &str) -> Self {
        Self {
            connection: ConnectionManager::new(backend_url),
        }
    }

    /// Run the bridge, reading from stdin and writing to stdout.
    ///
    /// One loop, three event sources: stdin lines, socket lifecycle
    /// events, and the reconnect timer. Handlers run to completion before
    /// the next event is dequeued.
    pub async fn run(&mut self) -> Result<(), McpError> {
        let (events_tx, mut events_rx) = mpsc::channel::<SocketEvent>(64);
        self.connection.connect(&events_tx);

        let stdin = tokio::io::stdin();
        let reader = BufReader::new(stdin);
        let mut lines = reader.lines();

        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();

        info!("MCP bridge starting");

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if line.is_empty() {
                                continue;
                            }
                            if let Some(response) = self.process_line(&line) {
                                write_json(&mut stdout, &response)?;
                            }
                        }
                        None => {
                            info!("stdin closed, shutting down bridge");
                            break;
                        }
                    }
                }
                Some(event) = events_rx.recv() => {
                    self.handle_socket_event(event, &mut stdout)?;
                }
                _ = self.connection.reconnect_due() => {
                    self.connection.connect(&events_tx);
                }
            }
        }

        Ok(())
    }

    /// Close the backend connection without draining anything
    pub fn shutdown(&mut self) {
        self.connection.close();
    }

    /// Route one input line. Returns the response to emit, if any.
    fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let log_req_id = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        debug!(req_id = log_req_id, raw = %line, "received raw JSON-RPC request");

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                // Malformed input: log and keep going. Stdout stays
                // protocol-only, so no response is emitted.
                error!(
                    req_id = log_req_id,
                    error = %e,
                    raw_input = %line,
                    "failed to parse JSON-RPC request"
                );
                return None;
            }
        };

        info!(
            req_id = log_req_id,
            method = %request.method,
            jsonrpc_id = ?request.id,
            "incoming JSON-RPC request"
        );

        match responder::respond(&request) {
            Ok(LocalOutcome::Answered(response)) => Some(response),
            Ok(LocalOutcome::ForwardRequired) => match self.connection.forward(&request) {
                Ok(Dispatch::Sent) => None,
                Ok(Dispatch::Queued) => {
                    info!(
                        req_id = log_req_id,
                        state = ?self.connection.state(),
                        queued = self.connection.queue_len(),
                        "backend unavailable, queued tool call"
                    );
                    None
                }
                Err(e) => {
                    warn!(req_id = log_req_id, error = %e, "tool call rejected");
                    Some(JsonRpcResponse::error(request.id.clone(), e.into()))
                }
            },
            Ok(LocalOutcome::NotApplicable) => {
                debug!(
                    req_id = log_req_id,
                    method = %request.method,
                    "no handler for method, dropping"
                );
                None
            }
            Err(e) => {
                error!(req_id = log_req_id, error = %e, "local handler failed");
                Some(JsonRpcResponse::error(request.id.clone(), e.into()))
            }
        }
    }

    /// React to one socket lifecycle event
    fn handle_socket_event<W: Write>(
        &mut self,
        event: SocketEvent,
        out: &mut W,
    ) -> Result<(), McpError> {
        match event {
            SocketEvent::Opened(tx) => self.connection.on_open(tx),
            SocketEvent::Message(text) => {
                // Pure pass-through: no parsing, no correlation, no reorder.
                debug!(raw = %text, "relaying backend message");
                writeln!(out, "{}", text)?;
                out.flush()?;
            }
            SocketEvent::Errored(reason) => self.connection.on_error(&reason),
            SocketEvent::Closed => self.connection.on_close(),
        }
        Ok(())
    }
}

fn write_json<W: Write>(out: &mut W, response: &JsonRpcResponse) -> Result<(), McpError> {
    let json = serde_json::to_string(response)?;
    debug!(raw = %json, "sending JSON-RPC response");
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

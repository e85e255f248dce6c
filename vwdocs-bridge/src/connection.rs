//! Backend connection management
//!
//! Owns the lifecycle of the single WebSocket connection to the
//! documentation backend: the connection state, the pending-message queue
//! used while disconnected, the reconnect timer, and the translation of
//! tool invocations into backend-shaped requests.

use std::collections::VecDeque;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Sleep};
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use vwdocs_protocol::{backend_method, JsonRpcRequest};

use crate::error::McpError;
use crate::socket;

/// Delay before a reconnect attempt after the socket closes
pub const RECONNECT_DELAY: Duration = Duration::from_millis(2000);

/// Connection state for backend communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No socket and no attempt in flight
    Disconnected,
    /// A connection attempt is in flight
    Connecting,
    /// Socket is open
    Connected,
}

/// Lifecycle events reported by the socket task
#[derive(Debug)]
pub enum SocketEvent {
    /// Socket opened; carries the sender feeding the socket's write half
    Opened(mpsc::UnboundedSender<Message>),
    /// Text payload received from the backend
    Message(String),
    /// Transport error; a close event follows on the same socket
    Errored(String),
    /// Socket closed
    Closed,
}

/// What `forward` did with a tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Sent over the live socket
    Sent,
    /// Appended to the pending queue until the next connect
    Queued,
}

/// Manages the connection to the documentation backend.
///
/// Exactly one instance exists per bridge. All handlers run on the bridge's
/// event loop, one at a time, so no field needs synchronization.
pub struct ConnectionManager {
    /// Backend WebSocket address
    url: String,
    /// Current connection state
    state: ConnectionState,
    /// Serialized requests awaiting a live connection, oldest first
    queue: VecDeque<String>,
    /// Write half of the live socket, if any
    socket: Option<mpsc::UnboundedSender<Message>>,
    /// Pending reconnect timer; rearming replaces it, so at most one exists
    reconnect: Option<Pin<Box<Sleep>>>,
}

impl ConnectionManager {
    /// Create a manager for the given backend address, initially disconnected
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: ConnectionState::Disconnected,
            queue: VecDeque::new(),
            socket: None,
            reconnect: None,
        }
    }

    /// Current connection state
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Number of messages waiting for the next successful connect
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Whether a reconnect timer is currently armed
    #[allow(dead_code)] // exercised by tests
    pub fn reconnect_scheduled(&self) -> bool {
        self.reconnect.is_some()
    }

    /// Start a connection attempt against the backend.
    ///
    /// Disarms any pending reconnect timer and spawns the socket task, which
    /// reports back through `events`.
    pub fn connect(&mut self, events: &mpsc::Sender<SocketEvent>) {
        self.reconnect = None;
        self.state = ConnectionState::Connecting;
        info!(url = %self.url, "connecting to backend");
        tokio::spawn(socket::run(self.url.clone(), events.clone()));
    }

    /// Translate a `tools/call` request and send or queue it.
    ///
    /// Exactly one of the two happens per call: the serialized backend
    /// request goes over the live socket, or it joins the pending queue.
    pub fn forward(&mut self, request: &JsonRpcRequest) -> Result<Dispatch, McpError> {
        let name = request.params["name"]
            .as_str()
            .ok_or_else(|| McpError::InvalidParams("Missing 'name' parameter".into()))?;
        let method = backend_method(name).ok_or_else(|| McpError::UnknownTool(name.into()))?;

        let arguments = match &request.params["arguments"] {
            serde_json::Value::Null => serde_json::json!({}),
            args => args.clone(),
        };

        let backend = JsonRpcRequest::new(request.id.clone(), method, arguments);
        let wire = serde_json::to_string(&backend)?;

        if self.state == ConnectionState::Connected {
            if let Some(tx) = &self.socket {
                if tx.send(Message::Text(wire.clone())).is_ok() {
                    debug!(method, "forwarded tool call to backend");
                    return Ok(Dispatch::Sent);
                }
                // Socket task died; its close event is already in flight.
                self.socket = None;
            }
        }

        self.queue.push_back(wire);
        Ok(Dispatch::Queued)
    }

    /// Socket opened: drain the pending queue in enqueue order, then keep
    /// the sender for subsequent sends.
    pub fn on_open(&mut self, tx: mpsc::UnboundedSender<Message>) {
        self.state = ConnectionState::Connected;
        self.reconnect = None;

        let queued = self.queue.len();
        while let Some(wire) = self.queue.pop_front() {
            if let Err(unsent) = tx.send(Message::Text(wire)) {
                warn!("socket task dropped while draining pending queue");
                if let Message::Text(wire) = unsent.0 {
                    self.queue.push_front(wire);
                }
                break;
            }
        }
        if queued > 0 {
            info!(queued, "drained pending messages to backend");
        }

        self.socket = Some(tx);
        info!(url = %self.url, "connected to backend");
    }

    /// Socket error: report only. The close event that follows owns the
    /// state transition.
    pub fn on_error(&self, reason: &str) {
        warn!(error = %reason, "backend socket error");
    }

    /// Socket closed: drop the handle and arm the reconnect timer,
    /// superseding any timer already pending.
    pub fn on_close(&mut self) {
        self.socket = None;
        self.state = ConnectionState::Disconnected;
        self.reconnect = Some(Box::pin(time::sleep(RECONNECT_DELAY)));
        info!(
            delay_ms = RECONNECT_DELAY.as_millis() as u64,
            "backend connection closed, reconnect scheduled"
        );
    }

    /// Wait for the armed reconnect timer; pends forever when none is armed
    pub async fn reconnect_due(&mut self) {
        match self.reconnect.as_mut() {
            Some(sleep) => sleep.as_mut().await,
            None => std::future::pending().await,
        }
    }

    /// Best-effort close for process shutdown; nothing is drained
    pub fn close(&mut self) {
        if let Some(tx) = self.socket.take() {
            let _ = tx.send(Message::Close(None));
        }
        self.reconnect = None;
        self.state = ConnectionState::Disconnected;
    }
}

//! Backend WebSocket task
//!
//! One task per connection attempt. Reports lifecycle through
//! `SocketEvent`s and pumps messages both ways until the socket dies.
//! Always ends by emitting `Closed`, so the connection manager can arm
//! its reconnect timer.

use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{error, info, warn};

use crate::connection::SocketEvent;

/// Connect to the backend and pump messages until the socket closes.
pub async fn run(url: String, events: mpsc::Sender<SocketEvent>) {
    let (ws, _) = match connect_async(url.as_str()).await {
        Ok(connected) => connected,
        Err(e) => {
            warn!(url = %url, error = %e, "backend connection attempt failed");
            let _ = events.send(SocketEvent::Errored(e.to_string())).await;
            let _ = events.send(SocketEvent::Closed).await;
            return;
        }
    };

    let (mut sink, mut stream) = ws.split();
    let (outgoing_tx, mut outgoing_rx) = mpsc::unbounded_channel::<Message>();

    if events.send(SocketEvent::Opened(outgoing_tx)).await.is_err() {
        // Bridge loop is gone; nothing left to report to.
        return;
    }

    loop {
        tokio::select! {
            // Outbound: bridge → backend
            Some(msg) = outgoing_rx.recv() => {
                if let Err(e) = sink.send(msg).await {
                    error!(error = %e, "failed to send to backend");
                    let _ = events.send(SocketEvent::Errored(e.to_string())).await;
                    break;
                }
            }
            // Inbound: backend → bridge
            incoming = stream.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        if events.send(SocketEvent::Message(text)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Binary(data))) => {
                        let text = String::from_utf8_lossy(&data).into_owned();
                        if events.send(SocketEvent::Message(text)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("backend closed the connection");
                        break;
                    }
                    // Ping/pong are answered by the transport itself
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!(error = %e, "failed to receive from backend");
                        let _ = events.send(SocketEvent::Errored(e.to_string())).await;
                        break;
                    }
                }
            }
        }
    }

    let _ = events.send(SocketEvent::Closed).await;
}

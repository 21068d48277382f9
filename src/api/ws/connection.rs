// src/api/ws/connection.rs
// A wrapper around the WebSocket connection to manage state and message sending.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::ws::{Message, Utf8Bytes, WebSocket};
use bytes::Bytes;
use futures_util::SinkExt;
use futures_util::stream::SplitSink;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::message::WsServerMessage;

/// Manages the sending half of a single WebSocket connection.
pub struct WsConnection {
    sender: Arc<Mutex<SplitSink<WebSocket, Message>>>,
    is_closed: Arc<Mutex<bool>>,
}

impl WsConnection {
    pub fn new(sender: SplitSink<WebSocket, Message>) -> Self {
        Self {
            sender: Arc::new(Mutex::new(sender)),
            is_closed: Arc::new(Mutex::new(false)),
        }
    }

    /// Mark this connection as closed to prevent further sends. Late
    /// events from an abandoned generation are discarded here rather
    /// than being emitted to a closed socket.
    pub async fn mark_closed(&self) {
        *self.is_closed.lock().await = true;
    }

    pub async fn is_closed(&self) -> bool {
        *self.is_closed.lock().await
    }

    /// Sends a structured `WsServerMessage` to the client with immediate flushing.
    pub async fn send_message(&self, msg: WsServerMessage) -> Result<()> {
        if self.is_closed().await {
            debug!("Skipping send on closed connection");
            return Ok(());
        }

        let json_str = serde_json::to_string(&msg)?;

        let mut sender = self.sender.lock().await;

        if let Err(e) = sender.send(Message::Text(Utf8Bytes::from(json_str))).await {
            warn!("Failed to send message (connection likely closed): {}", e);
            drop(sender);
            self.mark_closed().await;
            return Err(e.into());
        }

        if let Err(e) = sender.flush().await {
            warn!("Failed to flush message (connection likely closed): {}", e);
            drop(sender);
            self.mark_closed().await;
            return Err(e.into());
        }

        Ok(())
    }

    /// Sends an error event.
    pub async fn send_error(&self, message: &str, code: &str) -> Result<()> {
        self.send_message(WsServerMessage::Error {
            message: message.to_string(),
            code: code.to_string(),
        })
        .await
    }

    /// Sends a pong response to a client's ping with proper flushing.
    pub async fn send_pong(&self, data: Bytes) -> Result<()> {
        if self.is_closed().await {
            debug!("Skipping pong on closed connection");
            return Ok(());
        }

        let mut sender = self.sender.lock().await;

        if let Err(e) = sender.send(Message::Pong(data)).await {
            warn!("Failed to send pong: {}", e);
            drop(sender);
            self.mark_closed().await;
            return Err(e.into());
        }

        if let Err(e) = sender.flush().await {
            warn!("Failed to flush pong: {}", e);
            drop(sender);
            self.mark_closed().await;
            return Err(e.into());
        }

        Ok(())
    }
}

// src/api/ws/mod.rs
// WebSocket entry point: one connection owns one session for its lifetime.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::ws::{Message, WebSocket};
use axum::{
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub mod connection;
pub mod controller;
pub mod message;

pub use connection::WsConnection;
pub use controller::ChatController;

use crate::error::ChatError;
use crate::state::AppState;
use message::{WsClientMessage, WsServerMessage};

pub async fn ws_chat_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

async fn handle_socket(socket: WebSocket, app_state: Arc<AppState>) {
    let connection_start = Instant::now();
    let connection_id = Uuid::new_v4();
    let (sender, mut receiver) = socket.split();
    let connection = Arc::new(WsConnection::new(sender));

    app_state.sessions.create(connection_id).await;
    info!(connection_id = %connection_id, "WebSocket client connected");

    if let Err(e) = connection.send_message(WsServerMessage::ConnectionReady).await {
        error!("Failed to send connection ready message: {}", e);
        app_state.sessions.destroy(connection_id).await;
        return;
    }

    // Controller events reach the socket through a forwarding task so
    // an in-flight generation never blocks the receive loop.
    let (tx, mut rx) = mpsc::channel::<WsServerMessage>(100);
    let forward_connection = connection.clone();
    let forwarder = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let _ = forward_connection.send_message(event).await;
        }
    });

    let controller = Arc::new(ChatController::new(
        app_state.sessions.clone(),
        app_state.backend.clone(),
        tx,
    ));

    // At most one generation in flight per connection.
    let mut in_flight: Option<tokio::task::JoinHandle<()>> = None;

    while let Some(result) = receiver.next().await {
        match result {
            Ok(Message::Text(text)) => {
                let client_msg = match serde_json::from_str::<WsClientMessage>(&text) {
                    Ok(msg) => msg,
                    Err(e) => {
                        warn!(connection_id = %connection_id, "Failed to parse message: {}", e);
                        continue;
                    }
                };

                if in_flight.as_ref().is_some_and(|task| !task.is_finished()) {
                    let busy = ChatError::Busy;
                    let _ = connection.send_error(&busy.to_string(), busy.code()).await;
                    continue;
                }

                let controller = controller.clone();
                in_flight = Some(tokio::spawn(async move {
                    let outcome = match client_msg {
                        WsClientMessage::StartSession { persona } => {
                            controller.start_session(connection_id, &persona).await
                        }
                        WsClientMessage::Message { text } => {
                            controller.handle_message(connection_id, &text).await
                        }
                    };

                    if let Err(e) = outcome {
                        controller.report_error(&e).await;
                    }
                }));
            }
            Ok(Message::Ping(data)) => {
                if let Err(e) = connection.send_pong(data).await {
                    error!("Failed to send pong: {}", e);
                    break;
                }
            }
            Ok(Message::Close(_)) => {
                info!(connection_id = %connection_id, "Client initiated close");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                error!(connection_id = %connection_id, "WebSocket error: {}", e);
                break;
            }
        }
    }

    // Abandon any in-flight generation; its fragments must not outlive
    // the connection.
    if let Some(task) = in_flight.take() {
        task.abort();
    }
    connection.mark_closed().await;
    forwarder.abort();
    app_state.sessions.destroy(connection_id).await;

    info!(
        connection_id = %connection_id,
        "WebSocket client disconnected after {:.2}s",
        connection_start.elapsed().as_secs_f64()
    );
}

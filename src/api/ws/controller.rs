// src/api/ws/controller.rs
// Streaming session controller - seeds the history, drives the
// completion stream, relays fragments, and commits the assistant turn.

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::message::WsServerMessage;
use crate::error::{ChatError, ChatResult};
use crate::llm::{ChatTurn, CompletionBackend};
use crate::session::SessionStore;

/// Implicit opening user turn sent on persona activation, so the
/// simulated patient speaks first instead of waiting on the therapist.
pub const GREETING_PROMPT: &str = "Hello, I'm your therapist. How are you feeling today?";

/// Orchestrates one session's lifecycle. Events flow out through the
/// channel in generation order: zero or more fragments, then exactly
/// one terminal completion or error per attempt.
pub struct ChatController {
    sessions: Arc<SessionStore>,
    backend: Arc<dyn CompletionBackend>,
    events: mpsc::Sender<WsServerMessage>,
}

impl ChatController {
    pub fn new(
        sessions: Arc<SessionStore>,
        backend: Arc<dyn CompletionBackend>,
        events: mpsc::Sender<WsServerMessage>,
    ) -> Self {
        Self {
            sessions,
            backend,
            events,
        }
    }

    /// Persona (re)selection: reset the session, seed the history with
    /// the system instruction plus the implicit greeting turn, and
    /// stream the patient's opening reply.
    pub async fn start_session(&self, id: Uuid, persona_key: &str) -> ChatResult<()> {
        let persona = self.sessions.reset(id, persona_key).await?;
        info!(session_id = %id, persona = persona.key(), "Session started");

        self.emit(WsServerMessage::SessionStarted {
            persona: persona.key().to_string(),
            label: persona.label().to_string(),
        })
        .await;

        let prospective = vec![
            ChatTurn::system(persona.instruction()),
            ChatTurn::user(GREETING_PROMPT),
        ];

        self.generate(id, prospective).await
    }

    /// One user turn. Empty or whitespace-only text is rejected before
    /// any history mutation or external call. The first message of an
    /// activation collapses the persona seed and the user turn into a
    /// single system+user pair.
    pub async fn handle_message(&self, id: Uuid, text: &str) -> ChatResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::InvalidInput);
        }

        let session = self
            .sessions
            .get(id)
            .await
            .ok_or(ChatError::SessionNotFound(id))?;

        let mut prospective = if session.seeded {
            session.history
        } else {
            vec![ChatTurn::system(session.persona.instruction())]
        };
        prospective.push(ChatTurn::user(text));

        self.generate(id, prospective).await
    }

    /// Surface a controller failure to the client as a single error event.
    pub async fn report_error(&self, err: &ChatError) {
        warn!("Chat error: {}", err);
        self.emit(WsServerMessage::Error {
            message: err.to_string(),
            code: err.code().to_string(),
        })
        .await;
    }

    /// Shared generation path. The prospective turn list is what the
    /// history will become if the stream completes; a failed attempt
    /// commits nothing, leaving the session exactly as it was.
    async fn generate(&self, id: Uuid, mut prospective: Vec<ChatTurn>) -> ChatResult<()> {
        self.sessions.begin_generation(id).await?;
        let outcome = self.relay_stream(id, &prospective).await;
        self.sessions.finish_generation(id).await;

        let full_text = outcome?;

        prospective.push(ChatTurn::assistant(full_text.clone()));
        self.sessions.commit(id, prospective).await?;

        self.emit(WsServerMessage::ResponseComplete { full_text }).await;
        Ok(())
    }

    /// Relay fragments to the client in stream order while accumulating
    /// the full reply.
    async fn relay_stream(&self, id: Uuid, turns: &[ChatTurn]) -> ChatResult<String> {
        debug!(
            session_id = %id,
            turn_count = turns.len(),
            backend = self.backend.name(),
            "Submitting history for generation"
        );

        let mut stream = self
            .backend
            .stream_chat(turns)
            .await
            .map_err(|e| ChatError::generation(e.to_string()))?;

        let mut full_text = String::new();
        while let Some(fragment) = stream.next().await {
            let fragment = fragment.map_err(|e| ChatError::generation(e.to_string()))?;
            full_text.push_str(&fragment);
            self.emit(WsServerMessage::ResponseChunk { text: fragment }).await;
        }

        debug!(session_id = %id, response_len = full_text.len(), "Stream completed");
        Ok(full_text)
    }

    async fn emit(&self, msg: WsServerMessage) {
        // The receiver disappears when the connection closes; dropped
        // events are intentional at that point.
        let _ = self.events.send(msg).await;
    }
}

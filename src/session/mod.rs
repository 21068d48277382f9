// src/session/mod.rs
// Per-connection session state and the process-wide store

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ChatError, ChatResult};
use crate::llm::ChatTurn;
use crate::persona::Persona;

/// Mutable conversation state owned by exactly one connection for its
/// lifetime. When the history is non-empty its first turn is always the
/// system instruction of the active persona.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub persona: Persona,
    pub history: Vec<ChatTurn>,
    /// Whether the system instruction has been seeded for the current
    /// persona activation.
    pub seeded: bool,
    /// Single-flight latch: true while a generation is in flight.
    generating: bool,
}

/// Process-wide mapping from connection id to session state.
///
/// Cross-connection operations are independent; within one connection
/// history mutation is serialized by the generation latch, so no
/// per-session locking beyond the map lock is needed.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Install a fresh session for a new connection: empty history,
    /// default persona, unseeded. No failure mode.
    pub async fn create(&self, id: Uuid) {
        self.sessions.write().await.insert(id, Session::default());
    }

    /// Reset for a persona (re)selection: resolve the persona (unknown
    /// keys fall back to the default), clear history and the seeded
    /// flag, record the persona. Idempotent under repeated calls.
    pub async fn reset(&self, id: Uuid, persona_key: &str) -> ChatResult<Persona> {
        let persona = Persona::from_key(persona_key);

        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(ChatError::SessionNotFound(id))?;
        session.persona = persona;
        session.history.clear();
        session.seeded = false;

        Ok(persona)
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Release all session memory on disconnect.
    pub async fn destroy(&self, id: Uuid) {
        self.sessions.write().await.remove(&id);
    }

    /// Acquire the single-flight latch for one generation attempt.
    /// A second attempt while one is in flight is rejected as `Busy`.
    pub async fn begin_generation(&self, id: Uuid) -> ChatResult<()> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(ChatError::SessionNotFound(id))?;

        if session.generating {
            return Err(ChatError::Busy);
        }
        session.generating = true;

        Ok(())
    }

    /// Release the latch. Called on both the success and failure paths.
    pub async fn finish_generation(&self, id: Uuid) {
        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            session.generating = false;
        }
    }

    /// Commit the outcome of a successful generation: the prospective
    /// turn list (seed and/or user turn plus the assistant reply)
    /// becomes the history and the session is marked seeded. A failed
    /// attempt never reaches this point, so the session stays
    /// byte-identical to its pre-attempt state.
    pub async fn commit(&self, id: Uuid, history: Vec<ChatTurn>) -> ChatResult<()> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(ChatError::SessionNotFound(id))?;
        session.history = history;
        session.seeded = true;

        Ok(())
    }
}

// src/state.rs
// Application state shared across handlers

use std::sync::Arc;

use crate::llm::CompletionBackend;
use crate::session::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub backend: Arc<dyn CompletionBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            sessions: SessionStore::new(),
            backend,
        }
    }
}

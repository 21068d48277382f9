// src/error.rs
// Error taxonomy for the chat relay

use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced to the client as a single error event per attempt.
/// None of these are fatal to the process or to other connections.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Message must be a non-empty string.")]
    InvalidInput,
    #[error("A response is already being generated for this session.")]
    Busy,
    #[error("Generation failed: {0}")]
    Generation(String),
    #[error("No session for connection {0}")]
    SessionNotFound(Uuid),
}

impl ChatError {
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Stable machine-readable code carried on the error wire event.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::Busy => "BUSY",
            Self::Generation(_) => "GENERATION_FAILED",
            Self::SessionNotFound(_) => "SESSION_NOT_FOUND",
        }
    }
}

/// Chat relay result type
pub type ChatResult<T> = Result<T, ChatError>;

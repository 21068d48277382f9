// src/llm/mod.rs
// Completion backend trait - provider-agnostic streaming interface

pub mod openai;

use anyhow::Result;
use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};

pub use openai::OpenAiBackend;

/// One role-tagged message unit within a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Lazy, finite sequence of text fragments produced by one generation.
pub type CompletionStream = Box<dyn Stream<Item = Result<String>> + Send + Unpin>;

/// External completion capability: submit an ordered list of role-tagged
/// turns, receive a stream of text fragments. May fail before yielding
/// any fragment or mid-sequence.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn stream_chat(&self, turns: &[ChatTurn]) -> Result<CompletionStream>;
}

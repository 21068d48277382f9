// src/llm/openai.rs
// OpenAI chat-completions backend with SSE streaming

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ChatTurn, CompletionBackend, CompletionStream};
use crate::config::OpenAiConfig;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatCompletionChunk {
    choices: Vec<ChunkChoice>,
}

#[derive(Deserialize)]
struct ChunkChoice {
    delta: ChunkDelta,
}

#[derive(Deserialize)]
struct ChunkDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Streaming client for the OpenAI chat-completions API.
#[derive(Clone)]
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiBackend {
    const BASE_URL: &'static str = "https://api.openai.com/v1";

    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self> {
        if api_key.is_empty() {
            return Err(anyhow!("OpenAI API key is required"));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            model,
            timeout,
        })
    }

    pub fn from_config(config: &OpenAiConfig) -> Result<Self> {
        Self::new(
            config.api_key.clone(),
            config.model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Extract the content delta from one SSE line, if it carries one.
fn parse_delta_line(line: &str) -> Option<String> {
    let data = line.strip_prefix("data: ")?;
    if data == "[DONE]" {
        return None;
    }

    let chunk: ChatCompletionChunk = match serde_json::from_str(data) {
        Ok(chunk) => chunk,
        Err(_) => return None,
    };

    let delta = chunk.choices.first()?.delta.content.clone()?;
    if delta.is_empty() { None } else { Some(delta) }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn stream_chat(&self, turns: &[ChatTurn]) -> Result<CompletionStream> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: turns,
            stream: true,
        };

        debug!(
            "Sending streaming request to OpenAI {} with {} messages",
            self.model,
            turns.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", Self::BASE_URL))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("OpenAI streaming request rejected: {}", status);
            return Err(anyhow!("OpenAI streaming failed ({}): {}", status, error_text));
        }

        let mut bytes = response.bytes_stream();

        // SSE lines can straddle chunk boundaries, so carry a buffer
        // across reads and only parse complete lines.
        let stream = async_stream::stream! {
            let mut buf = String::new();
            while let Some(chunk) = bytes.next().await {
                match chunk {
                    Ok(chunk) => {
                        buf.push_str(&String::from_utf8_lossy(&chunk));
                        while let Some(pos) = buf.find('\n') {
                            let line = buf[..pos].trim_end_matches('\r').to_string();
                            buf.drain(..=pos);
                            if let Some(delta) = parse_delta_line(&line) {
                                yield Ok(delta);
                            }
                        }
                    }
                    Err(e) => {
                        yield Err(anyhow!("Stream error: {}", e));
                        return;
                    }
                }
            }
        };

        Ok(Box::new(stream.boxed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_requires_key() {
        let backend = OpenAiBackend::new(
            String::new(),
            "gpt-3.5-turbo".to_string(),
            Duration::from_secs(5),
        );
        assert!(backend.is_err());
    }

    #[test]
    fn backend_creation() {
        let backend = OpenAiBackend::new(
            "test-key".to_string(),
            "gpt-3.5-turbo".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(backend.model(), "gpt-3.5-turbo");
        assert_eq!(backend.name(), "openai");
    }

    #[test]
    fn parses_content_delta() {
        let line = r#"data: {"choices":[{"delta":{"content":"Hel"}}]}"#;
        assert_eq!(parse_delta_line(line), Some("Hel".to_string()));
    }

    #[test]
    fn skips_done_marker_and_non_data_lines() {
        assert_eq!(parse_delta_line("data: [DONE]"), None);
        assert_eq!(parse_delta_line("event: ping"), None);
        assert_eq!(parse_delta_line(""), None);
    }

    #[test]
    fn skips_chunks_without_content() {
        let role_only = r#"data: {"choices":[{"delta":{"role":"assistant"}}]}"#;
        assert_eq!(parse_delta_line(role_only), None);

        let empty = r#"data: {"choices":[{"delta":{"content":""}}]}"#;
        assert_eq!(parse_delta_line(empty), None);
    }

    #[test]
    fn tolerates_malformed_json() {
        assert_eq!(parse_delta_line("data: {not json"), None);
    }
}

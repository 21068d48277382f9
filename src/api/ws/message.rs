// src/api/ws/message.rs
// Defines the data structures for WebSocket client and server messages.

use serde::{Deserialize, Serialize};

/// Represents all possible messages sent from the client (frontend) to the server.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsClientMessage {
    /// Selects (or re-selects) a persona, resetting the session.
    StartSession { persona: String },

    /// Sends one user turn.
    Message { text: String },
}

/// Represents all possible messages sent from the server to the client (frontend).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum WsServerMessage {
    /// Signals that the server is connected and ready
    #[serde(rename = "connection_ready")]
    ConnectionReady,

    /// Acknowledges a persona (re)selection with the resolved persona
    #[serde(rename = "session_started")]
    SessionStarted { persona: String, label: String },

    /// One ordered fragment of the current generation
    #[serde(rename = "response_chunk")]
    ResponseChunk { text: String },

    /// Terminal success signal carrying the full assistant text
    #[serde(rename = "response_complete")]
    ResponseComplete { full_text: String },

    /// Terminal failure signal for the current generation attempt
    #[serde(rename = "error")]
    Error { message: String, code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_parse() {
        let msg: WsClientMessage =
            serde_json::from_str(r#"{"type":"start_session","persona":"hard"}"#).unwrap();
        assert!(matches!(msg, WsClientMessage::StartSession { persona } if persona == "hard"));

        let msg: WsClientMessage =
            serde_json::from_str(r#"{"type":"message","text":"How was your week?"}"#).unwrap();
        assert!(matches!(msg, WsClientMessage::Message { text } if text == "How was your week?"));
    }

    #[test]
    fn unknown_client_message_is_rejected() {
        let result = serde_json::from_str::<WsClientMessage>(r#"{"type":"typing","active":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn server_messages_serialize_with_type_tag() {
        let chunk = serde_json::to_value(WsServerMessage::ResponseChunk {
            text: "Hel".to_string(),
        })
        .unwrap();
        assert_eq!(chunk["type"], "response_chunk");
        assert_eq!(chunk["text"], "Hel");

        let complete = serde_json::to_value(WsServerMessage::ResponseComplete {
            full_text: "Hello there".to_string(),
        })
        .unwrap();
        assert_eq!(complete["type"], "response_complete");
        assert_eq!(complete["full_text"], "Hello there");

        let error = serde_json::to_value(WsServerMessage::Error {
            message: "boom".to_string(),
            code: "GENERATION_FAILED".to_string(),
        })
        .unwrap();
        assert_eq!(error["type"], "error");
        assert_eq!(error["code"], "GENERATION_FAILED");
    }
}

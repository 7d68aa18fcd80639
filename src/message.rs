// src/message.rs
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Parse a raw `/api/chat` body. Anything without a non-empty string
    /// `message` is a bad request, including bodies that are not JSON.
    pub fn from_slice(body: &[u8]) -> Result<Self, RelayError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|_| RelayError::MissingMessage)?;

        match value.get("message").and_then(|m| m.as_str()) {
            Some(message) if !message.is_empty() => Ok(Self {
                message: message.to_string(),
            }),
            _ => Err(RelayError::MissingMessage),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

// Upstream chat-completion wire format

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub stream: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Option<Vec<CompletionChoice>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Content of the first choice, if the provider produced any text.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
            .filter(|content| !content.is_empty())
    }
}

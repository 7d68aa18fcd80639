// src/services/relay.rs
use std::sync::Arc;

use crate::error::{RelayError, Result};
use crate::message::{ChatRequest, ChatResponse};
use crate::services::nim_client::CompletionClient;
use crate::services::prompt::build_prompt;

pub const NO_REPLY: &str = "No reply received";

/// Stateless request -> upstream -> reply pipeline behind `/api/chat`.
pub struct ChatRelay {
    client: Arc<dyn CompletionClient>,
    api_key: Option<String>,
}

impl ChatRelay {
    pub fn new(client: Arc<dyn CompletionClient>, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    /// Validate a raw body and relay it. The message is checked before the
    /// credential, and nothing goes upstream unless both are present.
    pub async fn handle(&self, body: &[u8]) -> Result<ChatResponse> {
        let request = ChatRequest::from_slice(body)?;
        self.relay(&request).await
    }

    pub async fn relay(&self, request: &ChatRequest) -> Result<ChatResponse> {
        if request.message.is_empty() {
            return Err(RelayError::MissingMessage);
        }
        let api_key = self.api_key.as_deref().ok_or(RelayError::MissingApiKey)?;

        let prompt = build_prompt(&request.message);
        let completion = self.client.complete(api_key, &prompt).await?;

        let reply = match completion.first_content() {
            Some(content) => content.to_string(),
            None => {
                tracing::warn!("upstream completion had no content");
                NO_REPLY.to_string()
            }
        };

        Ok(ChatResponse { reply })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ChatCompletion;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    /// Records every call and answers with a canned result.
    struct RecordingClient {
        calls: Mutex<Vec<(String, String)>>,
        answer: fn() -> Result<ChatCompletion>,
    }

    impl RecordingClient {
        fn new(answer: fn() -> Result<ChatCompletion>) -> Arc<Self> {
            Arc::new(Self { calls: Mutex::new(Vec::new()), answer })
        }

        async fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl CompletionClient for RecordingClient {
        async fn complete(&self, api_key: &str, prompt: &str) -> Result<ChatCompletion> {
            self.calls.lock().await.push((api_key.to_string(), prompt.to_string()));
            (self.answer)()
        }
    }

    fn reply_with_tips() -> Result<ChatCompletion> {
        Ok(serde_json::from_str(r#"{"choices":[{"message":{"content":"Post daily."}}]}"#).unwrap())
    }

    fn empty_completion() -> Result<ChatCompletion> {
        Ok(serde_json::from_str(r#"{"choices":[]}"#).unwrap())
    }

    fn rate_limited() -> Result<ChatCompletion> {
        Err(RelayError::Upstream { status: 429, details: "rate limited".into() })
    }

    #[tokio::test]
    async fn missing_message_never_calls_upstream() {
        let client = RecordingClient::new(reply_with_tips);
        let relay = ChatRelay::new(client.clone(), Some("key".into()));

        let bodies: [&[u8]; 3] = [b"{}", br#"{"message":""}"#, b"garbage"];
        for body in bodies {
            let err = relay.handle(body).await.unwrap_err();
            assert!(matches!(err, RelayError::MissingMessage));
        }
        assert!(client.calls().await.is_empty());
    }

    #[tokio::test]
    async fn whitespace_message_goes_upstream() {
        let client = RecordingClient::new(reply_with_tips);
        let relay = ChatRelay::new(client.clone(), Some("key".into()));

        let res = relay.handle(br#"{"message":"   "}"#).await.unwrap();
        assert_eq!(res.reply, "Post daily.");

        let calls = client.calls().await;
        assert_eq!(calls.len(), 1);
        assert!(calls[0].1.contains("User Question:    \n"));
    }

    #[tokio::test]
    async fn message_is_checked_before_credential() {
        let client = RecordingClient::new(reply_with_tips);
        let relay = ChatRelay::new(client.clone(), None);

        let err = relay.handle(b"{}").await.unwrap_err();
        assert!(matches!(err, RelayError::MissingMessage));
    }

    #[tokio::test]
    async fn missing_credential_never_calls_upstream() {
        let client = RecordingClient::new(reply_with_tips);
        let relay = ChatRelay::new(client.clone(), None);

        let err = relay.handle(br#"{"message":"hello"}"#).await.unwrap_err();
        assert!(matches!(err, RelayError::MissingApiKey));
        assert!(client.calls().await.is_empty());
    }

    #[tokio::test]
    async fn relays_first_choice_content() {
        let client = RecordingClient::new(reply_with_tips);
        let relay = ChatRelay::new(client.clone(), Some("nvapi-key".into()));

        let res = relay.handle(br#"{"message":"grow my cafe"}"#).await.unwrap();
        assert_eq!(res.reply, "Post daily.");

        let calls = client.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "nvapi-key");
        assert!(calls[0].1.contains("User Question: grow my cafe"));
    }

    #[tokio::test]
    async fn empty_completion_uses_placeholder() {
        let relay = ChatRelay::new(RecordingClient::new(empty_completion), Some("k".into()));
        let res = relay.handle(br#"{"message":"hi"}"#).await.unwrap();
        assert_eq!(res.reply, NO_REPLY);
    }

    #[tokio::test]
    async fn upstream_errors_pass_through() {
        let relay = ChatRelay::new(RecordingClient::new(rate_limited), Some("k".into()));
        match relay.handle(br#"{"message":"hi"}"#).await.unwrap_err() {
            RelayError::Upstream { status, details } => {
                assert_eq!(status, 429);
                assert_eq!(details, "rate limited");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn same_request_same_reply() {
        let client = RecordingClient::new(reply_with_tips);
        let relay = ChatRelay::new(client.clone(), Some("k".into()));

        let first = relay.handle(br#"{"message":"hi"}"#).await.unwrap();
        let second = relay.handle(br#"{"message":"hi"}"#).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(client.calls().await.len(), 2);
    }
}

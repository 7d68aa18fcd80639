// src/services/nim_client.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::error::{RelayError, Result};
use crate::message::{ChatCompletion, CompletionMessage, CompletionRequest};

/// Sampling settings sent with every completion.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.7,
            top_p: 0.95,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// One-shot completion transport. The relay only needs a prompt in and a
/// decoded completion out, so tests can swap in a stub.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<ChatCompletion>;
}

#[derive(Debug, Clone)]
pub struct NimClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    params: GenerationParams,
}

impl NimClient {
    pub fn new(base_url: &str, model: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model: model.into(),
            params: GenerationParams::default(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![CompletionMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            top_p: self.params.top_p,
            frequency_penalty: self.params.frequency_penalty,
            presence_penalty: self.params.presence_penalty,
            stream: false,
        }
    }
}

#[async_trait]
impl CompletionClient for NimClient {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<ChatCompletion> {
        let payload = self.build_request(prompt);

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "calling NIM API");

        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                details: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

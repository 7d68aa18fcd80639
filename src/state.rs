// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::services::nim_client::{CompletionClient, NimClient};
use crate::services::relay::ChatRelay;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: ChatRelay,
}

impl AppState {
    pub fn new(relay: ChatRelay) -> Self {
        Self { relay }
    }

    /// Wire the real NIM client from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = NimClient::new(&config.nim_base_url, &config.nim_model, config.request_timeout)?;
        Ok(Self::with_client(Arc::new(client), config))
    }

    pub fn with_client(client: Arc<dyn CompletionClient>, config: &Config) -> Self {
        Self::new(ChatRelay::new(client, config.nim_api_key.clone()))
    }
}

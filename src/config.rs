// src/config.rs
use std::fmt;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_NIM_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";
pub const DEFAULT_NIM_MODEL: &str = "meta/llama-4-maverick-17b-128e-instruct";

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Upstream
    pub nim_api_key: Option<String>,
    pub nim_base_url: String,
    pub nim_model: String,
    pub request_timeout: Duration,

    pub static_dir: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("nim_api_key", &self.nim_api_key.as_ref().map(|_| "<redacted>"))
            .field("nim_base_url", &self.nim_base_url)
            .field("nim_model", &self.nim_model)
            .field("request_timeout", &self.request_timeout)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            nim_api_key: None,
            nim_base_url: DEFAULT_NIM_BASE_URL.to_string(),
            nim_model: DEFAULT_NIM_MODEL.to_string(),
            request_timeout: Duration::from_secs(120),
            static_dir: "public".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        let request_timeout = match get("NIM_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("NIM_TIMEOUT_SECS must be whole seconds, got {raw:?}"))?,
            ),
            None => defaults.request_timeout,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            nim_api_key: get("NIM_API_KEY"),
            nim_base_url: get("NIM_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.nim_base_url),
            nim_model: get("NIM_MODEL").unwrap_or(defaults.nim_model),
            request_timeout,
            static_dir: get("STATIC_DIR").unwrap_or(defaults.static_dir),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

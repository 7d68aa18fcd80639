// src/error.rs
use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub const MISSING_MESSAGE: &str = "Missing 'message' in request body";
pub const MISSING_API_KEY: &str = "Server misconfiguration: missing NIM API key";

/// Every way a chat relay request can fail. The HTTP mapping lives in
/// `into_response` and must stay stable for UI compatibility.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{}", MISSING_MESSAGE)]
    MissingMessage,

    #[error("{}", MISSING_API_KEY)]
    MissingApiKey,

    /// Upstream answered with a non-2xx status.
    #[error("NIM API error: {status} {details}")]
    Upstream { status: u16, details: String },

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid upstream payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request body could not be read, e.g. it exceeds the size limit.
    #[error("{0}")]
    Body(#[from] BytesRejection),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingMessage => StatusCode::BAD_REQUEST,
            RelayError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            RelayError::Transport(_) | RelayError::Decode(_) | RelayError::Body(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn body(&self) -> serde_json::Value {
        match self {
            RelayError::MissingMessage => json!({ "error": MISSING_MESSAGE }),
            RelayError::MissingApiKey => json!({ "error": MISSING_API_KEY }),
            RelayError::Upstream { status, details } => json!({
                "error": "NIM API error",
                "status": status,
                "details": details,
            }),
            RelayError::Transport(_) | RelayError::Decode(_) | RelayError::Body(_) => json!({
                "error": "Internal Server Error",
                "message": self.to_string(),
            }),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::MissingMessage => tracing::warn!("rejected chat request: {}", self),
            RelayError::MissingApiKey => tracing::error!("{}", self),
            RelayError::Upstream { status, details } => {
                tracing::error!(status, details = %details, "NIM API error")
            }
            RelayError::Transport(_) | RelayError::Decode(_) | RelayError::Body(_) => {
                tracing::error!(error = %self, "error in /api/chat")
            }
        }

        (self.status_code(), Json(self.body())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

// src/routes/mod.rs
pub mod chat;
pub mod health;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use health::health_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// API routes plus the chat UI served from `static_dir` (`/` -> `index.html`).
pub fn create_router(static_dir: &str) -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

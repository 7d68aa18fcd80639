use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::message::HealthResponse;

// Never touches the upstream provider.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

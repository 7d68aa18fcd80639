use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{error::RelayError, message::ChatResponse, state::SharedState};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, RelayError> {
    let span = tracing::info_span!("chat", request_id = %Uuid::new_v4());

    async move {
        let body = body?;
        let response = state.relay.handle(&body).await?;
        tracing::info!(reply_len = response.reply.len(), "relayed chat reply");
        Ok::<_, RelayError>(Json(response))
    }
    .instrument(span)
    .await
}

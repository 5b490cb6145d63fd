//! POST /chat - one exchange against the shared history.
//!
//! Request: `{"message": "..."}`. Response: the bot reply and the entire
//! history, `{"response": "...", "history": [{"from": ..., "text": ...}]}`.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use parley_types::chat::ChatReply;

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let reply = state.chat_service.chat(&req.message).await?;
    Ok(Json(reply))
}

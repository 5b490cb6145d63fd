//! POST /reset - clear the shared history.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub status: &'static str,
}

pub async fn reset(State(state): State<AppState>) -> Json<ResetResponse> {
    state.chat_service.reset().await;
    Json(ResetResponse { status: "reset" })
}

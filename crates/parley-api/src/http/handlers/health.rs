//! GET /health - readiness plus the model in use.

use axum::Json;
use axum::extract::State;

use parley_types::chat::HealthStatus;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.chat_service.health())
}

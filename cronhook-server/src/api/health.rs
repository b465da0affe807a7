//! Health Check API Handler

use axum::{Json, extract::State};
use cronhook_core::dto::health::HealthStatus;

use crate::state::AppState;

/// GET /health
/// Reports liveness and how many job identifiers are currently resolvable
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::ok(state.index.len().await))
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use tracing::error;

use crate::state::AppState;

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.db.version().await {
        Ok(version) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "db_version": version.to_string(),
            })),
        ),
        Err(e) => {
            error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "error",
                    "message": e.to_string(),
                })),
            )
        }
    }
}

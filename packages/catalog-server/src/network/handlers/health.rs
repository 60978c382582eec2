//! Liveness endpoint for load balancers and operational monitoring.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use super::AppState;

/// Returns basic liveness information as JSON.
///
/// Always returns 200: the process being able to answer is the signal.
pub async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

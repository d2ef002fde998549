use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if the preference store is reachable
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let repo = state.preferences.repository();

    let mut status = json!({
        "status": "ok",
        "checks": {
            "store_backend": repo.backend_name(),
        }
    });

    if repo.health_check().await {
        status["checks"]["store"] = json!("ok");
    } else {
        // The calculator keeps working without the store
        status["checks"]["store"] = json!({"error": "unreachable"});
        status["status"] = json!("degraded");
    }

    status["checks"]["loading"] = json!(state.preferences.is_loading());
    status["checks"]["saving"] = json!(state.preferences.is_saving());

    Json(status)
}

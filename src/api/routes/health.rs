use axum::Json;
use serde_json::{json, Value};

/// Liveness probe. Reachable only with a valid token; performs no backend checks.
pub async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

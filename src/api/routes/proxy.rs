//! Opaque pass-through endpoints. Payload shape is owned and validated by
//! the respective backend; the gateway forwards the document unmodified.

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::api::AppState;
use crate::backend::BackendKind;
use crate::errors::GatewayError;

pub async fn brute_force(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    info!("Dispatching brute-force run");
    let relayed = state.backends.forward(BackendKind::BruteForce, &body).await?;
    Ok(Json(relayed))
}

pub async fn sql_injection(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    info!("Dispatching SQL-injection run");
    let relayed = state.backends.forward(BackendKind::SqlInjection, &body).await?;
    Ok(Json(relayed))
}

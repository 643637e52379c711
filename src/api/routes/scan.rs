use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::api::models::ScanParams;
use crate::api::AppState;
use crate::errors::GatewayError;

/// Trigger a scan on the scanner backend and relay its response. Mounted at
/// both `/scan` and the legacy `/trigger` path.
pub async fn trigger_scan(
    State(state): State<AppState>,
    Query(params): Query<ScanParams>,
) -> Result<Json<Value>, GatewayError> {
    params.validate()?;

    info!(
        target = %params.target,
        scan_type = params.scan_type.as_str(),
        version = params.version,
        "Dispatching scan"
    );

    let body = state.backends.run_scan(&params).await?;
    Ok(Json(body))
}

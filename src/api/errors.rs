use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Map, Value};

use crate::errors::GatewayError;

impl IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        // Backend errors relay the backend's status and wrap its body under
        // the per-service key so callers can tell gateway-level failures apart.
        if let GatewayError::Backend {
            backend,
            status,
            body,
        } = self
        {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            let mut wrapped = Map::new();
            wrapped.insert(backend.error_key().to_string(), body);
            return (status, Json(Value::Object(wrapped))).into_response();
        }

        let status = match &self {
            GatewayError::Validation(_) | GatewayError::Config(_) => StatusCode::BAD_REQUEST,
            GatewayError::Authentication(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

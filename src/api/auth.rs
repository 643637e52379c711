use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::api::AppState;
use crate::errors::GatewayError;

/// Reject the request before it reaches a handler unless it carries a valid
/// `Authorization: Bearer <token>` header. On success the decoded claims are
/// attached to the request for downstream use.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| GatewayError::Authentication("Missing bearer token".to_string()))?;

    let claims = state.verifier.verify(token)?;
    debug!(subject = claims.sub.as_deref().unwrap_or("-"), "Authenticated request");
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

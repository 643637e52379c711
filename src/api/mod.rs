pub mod auth;
pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{middleware, routing::get, routing::post, Router};

use crate::auth::TokenVerifier;
use crate::backend::BackendClient;
use crate::config::GatewayConfig;
use crate::errors::GatewayError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub backends: BackendClient,
    pub verifier: TokenVerifier,
}

pub fn create_app_state(config: GatewayConfig) -> Result<AppState, GatewayError> {
    let backends = BackendClient::new(&config)?;
    let verifier = TokenVerifier::new(&config.auth.secret);
    Ok(AppState {
        config: Arc::new(config),
        backends,
        verifier,
    })
}

pub fn build_router(state: AppState) -> Router {
    // Every dispatch endpoint sits behind token auth; only the console is public.
    let protected = Router::new()
        .route("/scan", get(routes::scan::trigger_scan))
        .route("/trigger", get(routes::scan::trigger_scan))
        .route("/brute", post(routes::proxy::brute_force))
        .route("/sqlinject", post(routes::proxy::sql_injection))
        .route("/health", get(routes::health::health_check))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .route("/", get(routes::console::console_page))
        .merge(protected)
        .with_state(state)
}

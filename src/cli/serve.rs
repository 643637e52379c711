use std::path::Path;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config;
use crate::errors::GatewayError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), GatewayError> {
    info!(
        host = %args.host,
        port = args.port,
        build = env!("BUILD_TIMESTAMP"),
        git = env!("GIT_HASH"),
        "Starting gateway"
    );

    let config = config::load_config(args.config.as_deref().map(Path::new)).await?;
    let state = api::create_app_state(config)?;
    let app = api::build_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| GatewayError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}

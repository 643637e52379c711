use serde_json::Value;
use thiserror::Error;

use crate::backend::BackendKind;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    /// The backend answered with a non-2xx status and a JSON body. The status
    /// and body are relayed to the caller, wrapped under the backend's error key.
    #[error("{backend} service returned status {status}")]
    Backend {
        backend: BackendKind,
        status: u16,
        body: Value,
    },

    /// Network failure, timeout, or a backend response that was not JSON.
    #[error("Failed to call {service} service: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

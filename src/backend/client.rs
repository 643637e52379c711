//! Outbound HTTP calls to the backend scan services.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::warn;

use crate::api::models::{ScanParams, ScanType};
use crate::config::GatewayConfig;
use crate::errors::GatewayError;

/// The backend services the gateway dispatches to. Each owns its display
/// name and the key its relayed error bodies are wrapped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Scanner,
    BruteForce,
    SqlInjection,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.service_name())
    }
}

impl BackendKind {
    pub fn service_name(&self) -> &'static str {
        match self {
            Self::Scanner => "scanner",
            Self::BruteForce => "brute-force",
            Self::SqlInjection => "SQL-injection",
        }
    }

    pub fn error_key(&self) -> &'static str {
        match self {
            Self::Scanner => "scanner_error",
            Self::BruteForce => "brute_error",
            Self::SqlInjection => "sql_error",
        }
    }
}

/// Shared outbound client. One instance per process; reqwest pools
/// connections internally, and the configured timeout applies to every call.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    scanner_url: String,
    brute_url: String,
    sql_url: String,
}

impl BackendClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            scanner_url: config.backends.scanner.clone(),
            brute_url: config.backends.brute.clone(),
            sql_url: config.backends.sql_injection.clone(),
        })
    }

    /// Trigger a scan. Booleans travel as the literal strings "true"/"false";
    /// `ports` is attached only for custom scans.
    pub async fn run_scan(&self, params: &ScanParams) -> Result<Value, GatewayError> {
        let mut query: Vec<(&str, String)> = vec![
            ("target", params.target.clone()),
            ("scan_type", params.scan_type.as_str().to_string()),
            ("version", params.version.to_string()),
        ];
        if params.scan_type == ScanType::Custom {
            if let Some(ports) = &params.ports {
                query.push(("ports", ports.clone()));
            }
        }

        self.dispatch(BackendKind::Scanner, self.http.get(&self.scanner_url).query(&query))
            .await
    }

    /// Forward an opaque JSON document unmodified. The backend owns the
    /// payload schema; the gateway does not look inside.
    pub async fn forward(&self, backend: BackendKind, body: &Value) -> Result<Value, GatewayError> {
        let url = match backend {
            BackendKind::Scanner => &self.scanner_url,
            BackendKind::BruteForce => &self.brute_url,
            BackendKind::SqlInjection => &self.sql_url,
        };

        self.dispatch(backend, self.http.post(url).json(body)).await
    }

    async fn dispatch(
        &self,
        backend: BackendKind,
        request: RequestBuilder,
    ) -> Result<Value, GatewayError> {
        let response = request.send().await.map_err(|e| GatewayError::Transport {
            service: backend.service_name(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| GatewayError::Transport {
            service: backend.service_name(),
            message: e.to_string(),
        })?;

        if status.is_success() {
            Ok(body)
        } else {
            warn!(
                service = backend.service_name(),
                status = status.as_u16(),
                "Backend returned error status"
            );
            Err(GatewayError::Backend {
                backend,
                status: status.as_u16(),
                body,
            })
        }
    }
}

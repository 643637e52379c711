use serde::{Deserialize, Serialize};

/// The JWT secret the legacy deployment shipped with. Debug builds fall back
/// to it with a warning when nothing else is configured; release builds
/// refuse to start on it.
pub const INSECURE_DEFAULT_SECRET: &str = "supersecretkey";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    pub auth: AuthConfig,
    pub backends: BackendsConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret shared with the token issuer. Usually supplied
    /// via STRIKEGATE_JWT_SECRET rather than the config file.
    pub secret: String,
}

/// Absolute endpoint URL per backend service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendsConfig {
    pub scanner: String,
    pub brute: String,
    pub sql_injection: String,
}

impl Default for BackendsConfig {
    fn default() -> Self {
        Self {
            scanner: "http://scanner:8001/scan".to_string(),
            brute: "http://brute:5002/brute".to_string(),
            sql_injection: "http://sql-injection:5003/sqlinject".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Timeout applied to every outbound backend call, in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 15 }
    }
}

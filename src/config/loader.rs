use std::path::Path;

use tracing::warn;

use super::types::{GatewayConfig, INSECURE_DEFAULT_SECRET};
use crate::errors::GatewayError;

/// Load the gateway configuration: optional YAML file, then environment
/// overrides, then validation. Called once at startup; the result is passed
/// down by reference, never stored globally.
pub async fn load_config(path: Option<&Path>) -> Result<GatewayConfig, GatewayError> {
    let mut config = match path {
        Some(path) => parse_file(path).await?,
        None => GatewayConfig::default(),
    };

    apply_env_overrides(&mut config)?;
    resolve_secret(&mut config)?;
    validate(&config)?;

    Ok(config)
}

async fn parse_file(path: &Path) -> Result<GatewayConfig, GatewayError> {
    if !path.exists() {
        return Err(GatewayError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: GatewayConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut GatewayConfig) -> Result<(), GatewayError> {
    if let Ok(secret) = std::env::var("STRIKEGATE_JWT_SECRET") {
        if !secret.is_empty() {
            config.auth.secret = secret;
        }
    }
    if let Ok(url) = std::env::var("STRIKEGATE_SCANNER_URL") {
        config.backends.scanner = url;
    }
    if let Ok(url) = std::env::var("STRIKEGATE_BRUTE_URL") {
        config.backends.brute = url;
    }
    if let Ok(url) = std::env::var("STRIKEGATE_SQL_URL") {
        config.backends.sql_injection = url;
    }
    if let Ok(secs) = std::env::var("STRIKEGATE_HTTP_TIMEOUT_SECS") {
        config.http.timeout_secs = secs.parse().map_err(|_| {
            GatewayError::Config(format!("Invalid STRIKEGATE_HTTP_TIMEOUT_SECS: {secs}"))
        })?;
    }
    Ok(())
}

/// Legacy deployments fell back to a hardcoded secret when the environment
/// variable was missing. Debug builds keep the fallback and warn; release
/// builds refuse to start.
fn resolve_secret(config: &mut GatewayConfig) -> Result<(), GatewayError> {
    if config.auth.secret.is_empty() {
        if cfg!(debug_assertions) {
            warn!("No JWT secret configured, using the built-in development secret; set STRIKEGATE_JWT_SECRET before deploying");
            config.auth.secret = INSECURE_DEFAULT_SECRET.to_string();
            return Ok(());
        }
        return Err(GatewayError::Config(
            "No JWT secret configured; set STRIKEGATE_JWT_SECRET".to_string(),
        ));
    }

    if config.auth.secret == INSECURE_DEFAULT_SECRET {
        if cfg!(debug_assertions) {
            warn!("JWT secret is the built-in development secret; set STRIKEGATE_JWT_SECRET before deploying");
            return Ok(());
        }
        return Err(GatewayError::Config(
            "Refusing to start with the built-in development JWT secret; set STRIKEGATE_JWT_SECRET".to_string(),
        ));
    }

    Ok(())
}

fn validate(config: &GatewayConfig) -> Result<(), GatewayError> {
    if config.http.timeout_secs == 0 {
        return Err(GatewayError::Config(
            "http.timeout_secs must be greater than zero".to_string(),
        ));
    }

    for (name, url) in [
        ("backends.scanner", &config.backends.scanner),
        ("backends.brute", &config.backends.brute),
        ("backends.sql_injection", &config.backends.sql_injection),
    ] {
        reqwest::Url::parse(url)
            .map_err(|e| GatewayError::Config(format!("Invalid URL for {name}: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GatewayConfig {
        let mut config = GatewayConfig::default();
        config.auth.secret = "a-perfectly-fine-secret".to_string();
        config
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.backends.scanner, "http://scanner:8001/scan");
        assert_eq!(config.backends.brute, "http://brute:5002/brute");
        assert_eq!(config.backends.sql_injection, "http://sql-injection:5003/sqlinject");
        assert_eq!(config.http.timeout_secs, 15);
        assert!(config.auth.secret.is_empty());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = valid_config();
        config.http.timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_backend_url() {
        let mut config = valid_config();
        config.backends.brute = "not a url".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults_with_secret() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_resolve_secret_keeps_configured_value() {
        let mut config = valid_config();
        resolve_secret(&mut config).unwrap();
        assert_eq!(config.auth.secret, "a-perfectly-fine-secret");
    }

    #[test]
    fn test_resolve_secret_fallback_in_debug_builds() {
        // Tests run without optimizations, so the development fallback applies.
        let mut config = GatewayConfig::default();
        resolve_secret(&mut config).unwrap();
        assert_eq!(config.auth.secret, INSECURE_DEFAULT_SECRET);
    }

    #[tokio::test]
    async fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.yaml");
        tokio::fs::write(&path, "auth:\n  secret: from-file\nhttp:\n  timeout_secs: 7\n")
            .await
            .unwrap();

        let config = load_config(Some(path.as_path())).await.unwrap();
        assert_eq!(config.auth.secret, "from-file");
        assert_eq!(config.http.timeout_secs, 7);
    }

    #[tokio::test]
    async fn test_load_config_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/gateway.yaml")))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }

    #[test]
    fn test_parse_yaml_overrides() {
        let yaml = r#"
auth:
  secret: from-file
backends:
  scanner: http://127.0.0.1:9001/scan
http:
  timeout_secs: 3
"#;
        let config: GatewayConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.auth.secret, "from-file");
        assert_eq!(config.backends.scanner, "http://127.0.0.1:9001/scan");
        // Sections not present keep their defaults
        assert_eq!(config.backends.brute, "http://brute:5002/brute");
        assert_eq!(config.http.timeout_secs, 3);
    }
}

//! Bearer token verification against the process-wide shared secret.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::GatewayError;

/// Decoded payload of a verified token. The gateway only enforces that a
/// valid token exists; claims are attached to the request for logging but
/// carry no authorization semantics.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    pub sub: Option<String>,
    pub exp: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Decode and verify a token. Any failure (malformed structure, bad
    /// signature, expiry) is an authentication error; the caller never
    /// learns which check failed beyond expired-vs-invalid.
    pub fn verify(&self, token: &str) -> Result<Claims, GatewayError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        GatewayError::Authentication("Token expired".to_string())
                    }
                    _ => GatewayError::Authentication(
                        "Invalid authentication credentials".to_string(),
                    ),
                }
            })
    }
}

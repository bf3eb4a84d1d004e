//! Session token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying the claims the frontend submitted at
//! login (at minimum the account email) plus an expiry one hour out. The
//! signing secret comes from `ACCESS_TOKEN_SECRET`.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use camera_shop_core::Email;

/// How long an issued token stays valid.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Errors from signing or verifying a token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The claims object could not be signed.
    #[error("failed to sign token: {0}")]
    Sign(#[source] jsonwebtoken::errors::Error),
    /// The token is malformed, expired, or carries a bad signature.
    #[error("failed to verify token: {0}")]
    Verify(#[source] jsonwebtoken::errors::Error),
}

/// Claims decoded from a verified token.
///
/// `email` is the only claim the access-control gates rely on; whatever else
/// the frontend put in the login payload rides along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account email the token was issued for.
    pub email: Email,
    /// Expiry as a unix timestamp.
    pub exp: i64,
    /// Remaining claims, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Issues and verifies signed session tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Create a token service from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
        }
    }

    /// Sign an arbitrary claims object, stamping an expiry one hour out.
    ///
    /// The payload is not validated here; a token without an `email` claim
    /// will simply fail verification at the auth gate.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Sign` if the claims cannot be serialized.
    pub fn issue(&self, claims: &Map<String, Value>) -> Result<String, TokenError> {
        let mut payload = claims.clone();
        payload.insert(
            "exp".to_string(),
            Value::from(Utc::now().timestamp() + TOKEN_TTL_SECS),
        );

        jsonwebtoken::encode(&Header::default(), &payload, &self.encoding_key)
            .map_err(TokenError::Sign)
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Verify` on malformed, expired, or tampered tokens,
    /// and on tokens missing the `email` claim.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Verify)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> TokenService {
        TokenService::new(&SecretString::from("kY8#mN2$pQ5&vX9!bR4@wT7*zL0^cF3j"))
    }

    fn login_claims() -> Map<String, Value> {
        let mut claims = Map::new();
        claims.insert("email".to_string(), json!("buyer@example.com"));
        claims.insert("name".to_string(), json!("Buyer"));
        claims
    }

    #[test]
    fn test_issue_then_verify_returns_original_claims() {
        let service = service();
        let token = service.issue(&login_claims()).unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.email.as_str(), "buyer@example.com");
        assert_eq!(claims.extra.get("name"), Some(&json!("Buyer")));
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let token = service().issue(&login_claims()).unwrap();

        let other = TokenService::new(&SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6d"));
        assert!(matches!(other.verify(&token), Err(TokenError::Verify(_))));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let service = service();

        // Sign a payload whose exp is already past the default leeway
        let mut payload = login_claims();
        payload.insert(
            "exp".to_string(),
            Value::from(Utc::now().timestamp() - 2 * TOKEN_TTL_SECS),
        );
        let token = jsonwebtoken::encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret("kY8#mN2$pQ5&vX9!bR4@wT7*zL0^cF3j".as_bytes()),
        )
        .unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::Verify(_))));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(service().verify("not-a-token").is_err());
    }

    #[test]
    fn test_verify_requires_email_claim() {
        let service = service();
        let mut claims = Map::new();
        claims.insert("name".to_string(), json!("Anonymous"));
        let token = service.issue(&claims).unwrap();

        assert!(service.verify(&token).is_err());
    }
}

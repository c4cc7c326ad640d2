//! JWT bearer token adapter using HS256 signing.
//!
//! Claims carry the subject plus issue and expiry timestamps. `exp` mirrors
//! `expires_at` so standard JWT validation enforces the same window the
//! login response reports to clients.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{IssuedToken, TokenClaims, TokenError, TokenService};

/// Validity window applied to issued tokens.
const TOKEN_LIFETIME_SECS: i64 = 7200;

/// Claims encoded into every token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    created_at: i64,
    expires_at: i64,
    exp: i64,
}

/// HS256 token service sharing one symmetric secret for signing and
/// verification.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl JwtTokenService {
    /// Create a token service signing with the given shared secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: Duration::seconds(TOKEN_LIFETIME_SECS),
        }
    }

    /// Override the validity window applied to newly issued tokens.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        let created_at = Utc::now().timestamp();
        let expires_at = created_at + self.lifetime.num_seconds();
        let claims = Claims {
            sub: subject.to_owned(),
            created_at,
            expires_at,
            exp: expires_at,
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| TokenError::issue(err.to_string()))?;

        Ok(IssuedToken {
            token,
            created_at,
            expires_at,
        })
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock leeway; a token is invalid the second it expires.
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::invalid())?;

        Ok(TokenClaims {
            subject: data.claims.sub,
            created_at: data.claims.created_at,
            expires_at: data.claims.expires_at,
        })
    }
}

//! Port abstraction for issuing and verifying bearer tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::define_port_error;

define_port_error! {
    /// Failures raised by token adapters.
    pub enum TokenError {
        /// The token could not be produced.
        Issue { message: String } => "token issue failed: {message}",
        /// The presented token is malformed, forged, or expired.
        Invalid => "token is invalid or expired",
    }
}

/// Claims recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Username the token was issued to.
    pub subject: String,
    /// Issue time as unix seconds.
    pub created_at: i64,
    /// Expiry time as unix seconds.
    pub expires_at: i64,
}

/// Freshly issued token with its validity window.
///
/// The timestamps in the response body equal the timestamps baked into the
/// token claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IssuedToken {
    /// Signed bearer token.
    pub token: String,
    /// Issue time as unix seconds.
    #[schema(example = 1_735_689_600_i64)]
    pub created_at: i64,
    /// Expiry time as unix seconds.
    #[schema(example = 1_735_696_800_i64)]
    pub expires_at: i64,
}

/// Driven port signing and verifying bearer tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Issue a token for the supplied subject.
    fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError>;

    /// Verify a presented token and recover its claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

/// Fixture token service for tests: issues a constant token and accepts it
/// back, rejecting everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTokenService;

/// Token string produced by [`FixtureTokenService`].
pub const FIXTURE_TOKEN: &str = "fixture-token";

impl TokenService for FixtureTokenService {
    fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        let _ = subject;
        Ok(IssuedToken {
            token: FIXTURE_TOKEN.to_owned(),
            created_at: 0,
            expires_at: 7200,
        })
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        if token == FIXTURE_TOKEN {
            Ok(TokenClaims {
                subject: "fixture-user".to_owned(),
                created_at: 0,
                expires_at: 7200,
            })
        } else {
            Err(TokenError::invalid())
        }
    }
}

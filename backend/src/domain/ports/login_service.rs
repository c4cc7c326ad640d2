//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing (or importing) the backing
//! infrastructure. This makes HTTP handler tests deterministic because they
//! can substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials};

use super::token_service::IssuedToken;

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return a signed bearer token with its
    /// validity window.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error>;
}

/// In-memory authenticator for tests and doc examples.
///
/// `alice` / `password` authenticates successfully and produces a fixed
/// token; everything else is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error> {
        if credentials.username() == "alice" && credentials.password() == "password" {
            Ok(IssuedToken {
                token: super::token_service::FIXTURE_TOKEN.to_owned(),
                created_at: 0,
                expires_at: 7200,
            })
        } else {
            Err(Error::unauthorized("Unauthorized - user not found"))
        }
    }
}

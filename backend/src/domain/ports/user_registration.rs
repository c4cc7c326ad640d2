//! Driving port for user registration.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, LoginCredentials, UserProfile};

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Hash the password and store a new user, returning the public profile.
    ///
    /// Duplicate usernames fail with
    /// [`crate::domain::ErrorCode::InvalidRequest`].
    async fn register(&self, credentials: &LoginCredentials) -> Result<UserProfile, Error>;
}

/// Fixture registration for tests: accepts anything, stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRegistration;

#[async_trait]
impl UserRegistration for FixtureUserRegistration {
    async fn register(&self, credentials: &LoginCredentials) -> Result<UserProfile, Error> {
        Ok(UserProfile {
            id: Uuid::new_v4(),
            username: credentials.username().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_registration_echoes_username() {
        let registration = FixtureUserRegistration;
        let creds =
            LoginCredentials::try_from_parts("alice", "password").expect("credentials shape");

        let profile = registration
            .register(&creds)
            .await
            .expect("fixture register succeeds");

        assert_eq!(profile.username, "alice");
    }
}

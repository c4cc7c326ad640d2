//! User domain service covering registration and credential login.
//!
//! `UserService` implements both user-facing driving ports over the same
//! store, hasher, and token issuer. Passwords are hashed before they reach
//! the store and the stored hash never leaves this module.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::auth::LoginCredentials;
use crate::domain::ports::{
    IssuedToken, LoginService, PasswordHasher, TokenService, UserPersistenceError, UserRegistration,
    UserRepository,
};
use crate::domain::user::UserProfile;

/// Store failures during registration surface as request errors when the
/// username is taken, and as infrastructure failures otherwise.
fn map_registration_store_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::DuplicateUsername => Error::invalid_request("User already exists"),
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user could not be saved: {message}"))
        }
    }
}

fn map_lookup_store_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::DuplicateUsername | UserPersistenceError::Query { .. } => {
            Error::internal(format!("user store error: {error}"))
        }
    }
}

/// User service implementing the registration and login driving ports.
#[derive(Clone)]
pub struct UserService<R, H, T> {
    users: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<R, H, T> UserService<R, H, T> {
    /// Create a new user service over a user store, password hasher, and
    /// token issuer.
    pub fn new(users: Arc<R>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R, H, T> UserRegistration for UserService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    async fn register(&self, credentials: &LoginCredentials) -> Result<UserProfile, Error> {
        let hash = self
            .hasher
            .hash(credentials.password())
            .map_err(|err| Error::internal(format!("password hash failed: {err}")))?;
        let user = crate::domain::user::User::try_from_strings(
            Uuid::new_v4(),
            credentials.username(),
            hash,
        )
        .map_err(|err| Error::internal(format!("invalid user record: {err}")))?;

        self.users
            .create(&user)
            .await
            .map_err(map_registration_store_error)?;

        Ok(UserProfile::from(user))
    }
}

#[async_trait]
impl<R, H, T> LoginService for UserService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error> {
        let user = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_lookup_store_error)?
            .ok_or_else(|| Error::unauthorized("Unauthorized - user not found"))?;

        if !self.hasher.verify(credentials.password(), user.password_hash()) {
            return Err(Error::unauthorized("Unauthorized - invalid password"));
        }

        self.tokens
            .issue(user.username().as_ref())
            .map_err(|err| Error::internal(format!("token issue failed: {err}")))
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;

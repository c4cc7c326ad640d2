//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Another user already holds this username.
        DuplicateUsername => "username already taken",
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Driven port persisting users keyed by unique username.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record. Fails with
    /// [`UserPersistenceError::DuplicateUsername`] when the username is taken.
    async fn create(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a user by username.
    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, UserPersistenceError>;
}

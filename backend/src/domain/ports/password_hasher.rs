//! Port abstraction for password hashing and verification.

use super::define_port_error;

define_port_error! {
    /// Failures raised while hashing a password.
    pub enum PasswordHashError {
        /// Hashing failed inside the adapter.
        Hash { message: String } => "password hashing failed: {message}",
    }
}

/// Driven port hashing passwords at registration and checking them at login.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted hash for storage.
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check a password attempt against a stored hash. Malformed hashes count
    /// as a mismatch.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Fixture hasher for tests: reversible marker instead of a real hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePasswordHasher;

impl PasswordHasher for FixturePasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        Ok(format!("hashed:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        hash.strip_prefix("hashed:") == Some(password)
    }
}

//! Bcrypt-backed password hashing adapter.

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Bcrypt implementation of the password hasher port.
///
/// The cost factor is fixed at construction; [`Default`] uses the crate's
/// recommended cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit cost factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        bcrypt::hash(password, self.cost).map_err(|err| PasswordHashError::hash(err.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        // A malformed stored hash counts as a mismatch, not an error.
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

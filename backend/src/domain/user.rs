//! User data model.
//!
//! A user exists for authentication only: a unique username plus a bcrypt
//! password hash. The hash never leaves the domain; clients only ever see
//! the [`UserProfile`] projection.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
    EmptyPasswordHash,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPasswordHash => write!(f, "password hash must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Validated username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(username.into())
    }

    fn from_owned(username: String) -> Result<Self, UserValidationError> {
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Application user holding credential material.
///
/// ## Invariants
/// - `username` is non-empty once trimmed.
/// - `password_hash` is a non-empty bcrypt hash.
///
/// The struct deliberately has no serde derives so the hash cannot be
/// serialized by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    username: Username,
    password_hash: String,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(id: Uuid, username: Username, password_hash: String) -> Result<Self, UserValidationError> {
        if password_hash.is_empty() {
            return Err(UserValidationError::EmptyPasswordHash);
        }
        Ok(Self {
            id,
            username,
            password_hash,
        })
    }

    /// Fallible constructor accepting raw strings.
    pub fn try_from_strings(
        id: Uuid,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let username = Username::new(username)?;
        Self::new(id, username, password_hash.into())
    }

    /// Stable user identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Unique username used for login.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored bcrypt hash for password verification.
    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }
}

/// Public projection of a user, safe to return to clients.
///
/// # Examples
/// ```
/// use company_service::domain::{User, UserProfile};
/// use uuid::Uuid;
///
/// let user = User::try_from_strings(Uuid::new_v4(), "alice", "$2b$12$hash").unwrap();
/// let profile = UserProfile::from(&user);
/// assert_eq!(profile.username, "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    /// Stable user identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Uuid,
    /// Unique username.
    #[schema(example = "alice")]
    pub username: String,
}

impl From<&User> for UserProfile {
    fn from(value: &User) -> Self {
        Self {
            id: value.id,
            username: value.username.as_ref().to_owned(),
        }
    }
}

impl From<User> for UserProfile {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username.into(),
        }
    }
}

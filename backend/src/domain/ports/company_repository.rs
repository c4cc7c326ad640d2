//! Driven port for company persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Company;

use super::macros::define_port_error;

define_port_error! {
    /// Failures surfaced by company persistence adapters.
    ///
    /// A name collision is its own variant so callers can distinguish it
    /// from infrastructure failures.
    pub enum CompanyPersistenceError {
        /// Another company already holds this name.
        DuplicateName => "company name already taken",
        /// The backing store cannot be reached.
        Connection { message: String } => "company store connection error: {message}",
        /// The store rejected or failed the operation.
        Query { message: String } => "company store query error: {message}",
    }
}

/// Result of a full-replace update.
///
/// The store reports whether any row matched; callers decide what a
/// zero-row update means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Exactly one row was replaced.
    Updated,
    /// No row carried the supplied identifier.
    NoMatch,
}

/// Driven port persisting companies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a new company. Fails with
    /// [`CompanyPersistenceError::DuplicateName`] when the name is taken.
    async fn create(&self, company: &Company) -> Result<(), CompanyPersistenceError>;

    /// Replace the stored company carrying the same identifier.
    async fn update(&self, company: &Company) -> Result<UpdateOutcome, CompanyPersistenceError>;

    /// Remove the company with the supplied identifier, if present.
    async fn delete(&self, id: Uuid) -> Result<(), CompanyPersistenceError>;

    /// Load a company by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, CompanyPersistenceError>;
}

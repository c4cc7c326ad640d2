//! Shared Diesel error mapping for the company and user repositories.
//!
//! Both repositories translate infrastructure failures the same way: pool
//! failures become connection errors, unique-key violations become the
//! port's duplicate variant, and everything else becomes a query error.
//! The constructors are passed in so each repository keeps its own error
//! type.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into duplicate/query/connection constructors.
///
/// Unique-constraint violations route to `duplicate`; the caller decides
/// which port variant that is. Closed connections route to `connection`,
/// and the remaining variants collapse into `query`.
pub(crate) fn map_basic_diesel_error<E, D, Q, C>(
    error: diesel::result::Error,
    duplicate: D,
    query: Q,
    connection: C,
) -> E
where
    D: FnOnce() -> E,
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => duplicate(),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => query("database error"),
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        _ => query("database error"),
    }
}

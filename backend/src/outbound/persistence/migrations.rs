//! Embedded Diesel migrations applied at startup.
//!
//! Migrations run over a short-lived synchronous connection before the pool
//! is built, so the async runtime never blocks on DDL.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be established.
    #[error("migration connection failed: {message}")]
    Connection { message: String },

    /// A migration failed to apply.
    #[error("migration run failed: {message}")]
    Run { message: String },
}

impl MigrationError {
    fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    fn run(message: impl Into<String>) -> Self {
        Self::Run {
            message: message.into(),
        }
    }
}

/// Apply all pending embedded migrations against the given database.
///
/// # Errors
///
/// Returns [`MigrationError::Connection`] when the database is unreachable
/// and [`MigrationError::Run`] when a migration fails to apply.
pub fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut connection = PgConnection::establish(database_url)
        .map_err(|err| MigrationError::connection(err.to_string()))?;

    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::run(err.to_string()))?;

    info!(count = applied.len(), "database migrations applied");
    Ok(())
}

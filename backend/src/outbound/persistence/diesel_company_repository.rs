//! PostgreSQL-backed `CompanyRepository` implementation using Diesel ORM.
//!
//! This adapter persists companies and rebuilds them through the validated
//! domain constructor. Unique-violation errors on the name column surface as
//! [`CompanyPersistenceError::DuplicateName`] so the service layer can report
//! the collision distinctly from infrastructure failures.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{CompanyPersistenceError, CompanyRepository, UpdateOutcome};
use crate::domain::{Company, CompanyDraft};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CompanyChangeset, CompanyRow, NewCompanyRow};
use super::pool::{DbPool, PoolError};
use super::schema::companies;

/// Diesel-backed implementation of the company repository port.
#[derive(Clone)]
pub struct DieselCompanyRepository {
    pool: DbPool,
}

impl DieselCompanyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> CompanyPersistenceError {
    map_basic_pool_error(error, |message| {
        CompanyPersistenceError::connection(message)
    })
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> CompanyPersistenceError {
    map_basic_diesel_error(
        error,
        CompanyPersistenceError::duplicate_name,
        CompanyPersistenceError::query,
        CompanyPersistenceError::connection,
    )
}

/// Convert a database row into a validated domain company.
///
/// Rows that fail domain validation indicate drift between the database
/// contents and the domain rules; they map to query errors.
fn row_to_company(row: CompanyRow) -> Result<Company, CompanyPersistenceError> {
    let CompanyRow {
        id,
        name,
        description,
        amount_of_employees,
        registered,
        company_type,
        created_at: _,
        updated_at: _,
    } = row;

    Company::new(
        id,
        CompanyDraft {
            name,
            description,
            amount_of_employees: Some(amount_of_employees),
            registered: Some(registered),
            company_type: Some(company_type),
        },
    )
    .map_err(|err| CompanyPersistenceError::query(err.to_string()))
}

#[async_trait]
impl CompanyRepository for DieselCompanyRepository {
    async fn create(&self, company: &Company) -> Result<(), CompanyPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewCompanyRow {
            id: company.id(),
            name: company.name().as_ref(),
            description: company.description().map(AsRef::as_ref),
            amount_of_employees: company.amount_of_employees(),
            registered: company.registered(),
            company_type: company.company_type().as_str(),
        };

        diesel::insert_into(companies::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, company: &Company) -> Result<UpdateOutcome, CompanyPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = CompanyChangeset {
            name: company.name().as_ref(),
            description: company.description().map(AsRef::as_ref),
            amount_of_employees: company.amount_of_employees(),
            registered: company.registered(),
            company_type: company.company_type().as_str(),
        };

        let rows = diesel::update(companies::table.filter(companies::id.eq(company.id())))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if rows == 0 {
            Ok(UpdateOutcome::NoMatch)
        } else {
            Ok(UpdateOutcome::Updated)
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), CompanyPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Deleting an absent row is not an error; the operation is idempotent.
        diesel::delete(companies::table.filter(companies::id.eq(id)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, CompanyPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = companies::table
            .filter(companies::id.eq(id))
            .select(CompanyRow::as_select())
            .first::<CompanyRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_company).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use chrono::Utc;
    use diesel::result::DatabaseErrorKind;
    use rstest::{fixture, rstest};

    use super::*;

    fn database_error(kind: DatabaseErrorKind, message: &str) -> diesel::result::Error {
        diesel::result::Error::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[fixture]
    fn valid_row() -> CompanyRow {
        let now = Utc::now();
        CompanyRow {
            id: Uuid::new_v4(),
            name: "Initech".to_owned(),
            description: Some("Makes TPS report software".to_owned()),
            amount_of_employees: 120,
            registered: true,
            company_type: "Corporation".to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let pool_err = PoolError::checkout("connection refused");
        let repo_err = map_pool_error(pool_err);

        assert!(matches!(repo_err, CompanyPersistenceError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn unique_violation_maps_to_duplicate_name() {
        let diesel_err = database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint \"companies_name_key\"",
        );

        assert_eq!(
            map_diesel_error(diesel_err),
            CompanyPersistenceError::DuplicateName
        );
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let diesel_err = database_error(DatabaseErrorKind::ClosedConnection, "connection closed");
        let repo_err = map_diesel_error(diesel_err);

        assert!(matches!(repo_err, CompanyPersistenceError::Connection { .. }));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, CompanyPersistenceError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn row_conversion_preserves_all_fields(valid_row: CompanyRow) {
        let id = valid_row.id;
        let company = row_to_company(valid_row).expect("valid row converts");

        assert_eq!(company.id(), id);
        assert_eq!(company.name().as_ref(), "Initech");
        assert_eq!(
            company.description().map(AsRef::as_ref),
            Some("Makes TPS report software")
        );
        assert_eq!(company.amount_of_employees(), 120);
        assert!(company.registered());
        assert_eq!(company.company_type().as_str(), "Corporation");
    }

    #[rstest]
    fn row_conversion_rejects_unknown_company_type(mut valid_row: CompanyRow) {
        valid_row.company_type = "Conglomerate".to_owned();

        let error = row_to_company(valid_row).expect_err("unknown type should fail");
        assert!(matches!(error, CompanyPersistenceError::Query { .. }));
        assert!(error.to_string().contains("invalid company type"));
    }

    #[rstest]
    fn row_conversion_rejects_negative_headcount(mut valid_row: CompanyRow) {
        valid_row.amount_of_employees = -1;

        let error = row_to_company(valid_row).expect_err("negative headcount should fail");
        assert!(matches!(error, CompanyPersistenceError::Query { .. }));
    }
}

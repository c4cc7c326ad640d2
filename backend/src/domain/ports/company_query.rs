//! Driving port for company reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Company, CompanyDraft, Error};

/// Request to load one company by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCompanyRequest {
    pub id: Uuid,
}

/// Driving port for company read operations. Reads never emit events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyQuery: Send + Sync {
    /// Load the company stored under the request id.
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] when no such company
    /// exists.
    async fn get(&self, request: GetCompanyRequest) -> Result<Company, Error>;
}

/// Fixture query implementation returning a deterministic company under the
/// requested identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompanyQuery;

#[async_trait]
impl CompanyQuery for FixtureCompanyQuery {
    async fn get(&self, request: GetCompanyRequest) -> Result<Company, Error> {
        Company::new(
            request.id,
            CompanyDraft {
                name: "Fixture Co".to_owned(),
                description: None,
                amount_of_employees: Some(1),
                registered: Some(true),
                company_type: Some("Corporation".to_owned()),
            },
        )
        .map_err(|err| Error::internal(format!("invalid fixture company: {err}")))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_query_echoes_requested_id() {
        let id = Uuid::new_v4();
        let query = FixtureCompanyQuery;

        let company = query
            .get(GetCompanyRequest { id })
            .await
            .expect("fixture get succeeds");

        assert_eq!(company.id(), id);
        assert_eq!(company.name().as_ref(), "Fixture Co");
    }
}

//! Driving port for company mutations.
//!
//! Requests carry the raw draft exactly as decoded from the wire; validation
//! happens inside the service so HTTP adapters stay free of business rules.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Company, CompanyDraft, Error};

/// Request to create a company. The service assigns the identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCompanyRequest {
    pub draft: CompanyDraft,
}

/// Request to replace the company stored under `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCompanyRequest {
    pub id: Uuid,
    pub draft: CompanyDraft,
}

/// Request to remove the company stored under `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCompanyRequest {
    pub id: Uuid,
}

/// Driving port for company write operations.
///
/// Successful mutations return the stored entity (or nothing for delete) and
/// emit exactly one event after the store acknowledges the write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyCommand: Send + Sync {
    /// Validate the draft, assign a fresh identifier, and persist it.
    async fn create(&self, request: CreateCompanyRequest) -> Result<Company, Error>;

    /// Validate the draft and replace the stored company under the request id.
    async fn update(&self, request: UpdateCompanyRequest) -> Result<Company, Error>;

    /// Remove the company under the request id.
    async fn delete(&self, request: DeleteCompanyRequest) -> Result<(), Error>;
}

/// Fixture command implementation for tests that do not need persistence.
///
/// Validates drafts exactly like the real service but stores nothing and
/// publishes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompanyCommand;

fn validate(id: Uuid, draft: CompanyDraft) -> Result<Company, Error> {
    Company::new(id, draft).map_err(|err| Error::invalid_request(err.to_string()))
}

#[async_trait]
impl CompanyCommand for FixtureCompanyCommand {
    async fn create(&self, request: CreateCompanyRequest) -> Result<Company, Error> {
        validate(Uuid::new_v4(), request.draft)
    }

    async fn update(&self, request: UpdateCompanyRequest) -> Result<Company, Error> {
        validate(request.id, request.draft)
    }

    async fn delete(&self, _request: DeleteCompanyRequest) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn valid_draft() -> CompanyDraft {
        CompanyDraft {
            name: "Initech".to_owned(),
            description: None,
            amount_of_employees: Some(120),
            registered: Some(true),
            company_type: Some("Corporation".to_owned()),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_create_validates_and_echoes(valid_draft: CompanyDraft) {
        let command = FixtureCompanyCommand;
        let company = command
            .create(CreateCompanyRequest { draft: valid_draft })
            .await
            .expect("fixture create succeeds");

        assert_eq!(company.name().as_ref(), "Initech");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_update_preserves_request_id(valid_draft: CompanyDraft) {
        let id = Uuid::new_v4();
        let command = FixtureCompanyCommand;
        let company = command
            .update(UpdateCompanyRequest {
                id,
                draft: valid_draft,
            })
            .await
            .expect("fixture update succeeds");

        assert_eq!(company.id(), id);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_create_rejects_invalid_drafts() {
        let command = FixtureCompanyCommand;
        let error = command
            .create(CreateCompanyRequest {
                draft: CompanyDraft::default(),
            })
            .await
            .expect_err("empty draft must fail validation");

        assert_eq!(
            error.message(),
            "invalid company name: must be non-empty and up to 15 characters"
        );
    }
}

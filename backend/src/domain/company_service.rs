//! Company domain services.
//!
//! `CompanyCommandService` implements the mutation pipeline behind the
//! company driving ports: validate the draft, persist it, then publish
//! exactly one event once the store has acknowledged the write. Publishing
//! is best-effort; failures are logged here and never change the outcome.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::company::{Company, CompanyValidationError};
use crate::domain::company_events::CompanyEvent;
use crate::domain::ports::{
    CompanyCommand, CompanyPersistenceError, CompanyQuery, CompanyRepository,
    CreateCompanyRequest, DeleteCompanyRequest, EventPublisher, GetCompanyRequest,
    UpdateCompanyRequest, UpdateOutcome,
};

fn map_validation_error(error: CompanyValidationError) -> Error {
    let (field, code) = match error {
        CompanyValidationError::InvalidName => ("name", "invalid_name"),
        CompanyValidationError::MissingEmployeeCount => {
            ("amount_of_employees", "missing_employee_count")
        }
        CompanyValidationError::NegativeEmployeeCount => {
            ("amount_of_employees", "negative_employee_count")
        }
        CompanyValidationError::MissingRegistered => ("registered", "missing_registered"),
        CompanyValidationError::MissingType => ("type", "missing_type"),
        CompanyValidationError::InvalidType => ("type", "invalid_type"),
        CompanyValidationError::InvalidDescription => ("description", "invalid_description"),
    };
    Error::invalid_request(error.to_string()).with_details(json!({"field": field, "code": code}))
}

/// Store failures during create and update surface as request errors, apart
/// from unreachable-store conditions.
fn map_mutation_store_error(error: CompanyPersistenceError) -> Error {
    match error {
        CompanyPersistenceError::DuplicateName => {
            Error::invalid_request("Company name already exists")
                .with_details(json!({"field": "name", "code": "duplicate_name"}))
        }
        CompanyPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("company store unavailable: {message}"))
        }
        CompanyPersistenceError::Query { message } => {
            Error::invalid_request(format!("company could not be saved: {message}"))
        }
    }
}

/// Store failures during delete and get are infrastructure failures.
fn map_store_error(error: CompanyPersistenceError) -> Error {
    match error {
        CompanyPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("company store unavailable: {message}"))
        }
        CompanyPersistenceError::DuplicateName | CompanyPersistenceError::Query { .. } => {
            Error::internal(format!("company store error: {error}"))
        }
    }
}

/// Company service implementing the mutation driving port.
#[derive(Clone)]
pub struct CompanyCommandService<R, P> {
    companies: Arc<R>,
    events: Arc<P>,
}

impl<R, P> CompanyCommandService<R, P> {
    /// Create a new command service over a company store and event publisher.
    pub fn new(companies: Arc<R>, events: Arc<P>) -> Self {
        Self { companies, events }
    }
}

impl<R, P> CompanyCommandService<R, P>
where
    P: EventPublisher,
{
    /// Publish after the store has committed. Failures are logged, never
    /// returned.
    async fn emit(&self, event: CompanyEvent) {
        if let Err(err) = self.events.publish(&event).await {
            error!(
                error = %err,
                action = %event.action(),
                company_id = %event.company_id(),
                "company event publish failed",
            );
        }
    }
}

#[async_trait]
impl<R, P> CompanyCommand for CompanyCommandService<R, P>
where
    R: CompanyRepository,
    P: EventPublisher,
{
    async fn create(&self, request: CreateCompanyRequest) -> Result<Company, Error> {
        let company =
            Company::new(Uuid::new_v4(), request.draft).map_err(map_validation_error)?;

        self.companies
            .create(&company)
            .await
            .map_err(map_mutation_store_error)?;

        self.emit(CompanyEvent::created(company.clone())).await;
        Ok(company)
    }

    async fn update(&self, request: UpdateCompanyRequest) -> Result<Company, Error> {
        let company = Company::new(request.id, request.draft).map_err(map_validation_error)?;

        // A zero-row match is still a success; the update acknowledges the
        // replacement value without checking prior existence.
        let outcome = self
            .companies
            .update(&company)
            .await
            .map_err(map_mutation_store_error)?;
        if outcome == UpdateOutcome::NoMatch {
            debug!(company_id = %company.id(), "company update matched no rows");
        }

        self.emit(CompanyEvent::updated(company.clone())).await;
        Ok(company)
    }

    async fn delete(&self, request: DeleteCompanyRequest) -> Result<(), Error> {
        self.companies
            .delete(request.id)
            .await
            .map_err(map_store_error)?;

        self.emit(CompanyEvent::deleted(request.id)).await;
        Ok(())
    }
}

/// Company service implementing the read driving port.
#[derive(Clone)]
pub struct CompanyQueryService<R> {
    companies: Arc<R>,
}

impl<R> CompanyQueryService<R> {
    /// Create a new query service over a company store.
    pub fn new(companies: Arc<R>) -> Self {
        Self { companies }
    }
}

#[async_trait]
impl<R> CompanyQuery for CompanyQueryService<R>
where
    R: CompanyRepository,
{
    async fn get(&self, request: GetCompanyRequest) -> Result<Company, Error> {
        self.companies
            .find_by_id(request.id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("Company not found"))
    }
}

#[cfg(test)]
#[path = "company_service_tests.rs"]
mod tests;

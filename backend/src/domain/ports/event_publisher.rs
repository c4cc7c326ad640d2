//! Driven port for publishing company mutation events.
//!
//! Publishing is best-effort: the mutation service calls this port after the
//! store has committed and logs failures without surfacing them to callers.

use async_trait::async_trait;

use crate::domain::CompanyEvent;

use super::macros::define_port_error;

define_port_error! {
    /// Failures surfaced by event publishing adapters.
    pub enum EventPublishError {
        /// The broker cannot be reached.
        Unavailable { message: String } => "event broker unavailable: {message}",
        /// The broker refused the event.
        Rejected { message: String } => "event rejected: {message}",
    }
}

/// Driven port publishing one event per committed mutation, keyed by action.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a company mutation event.
    async fn publish(&self, event: &CompanyEvent) -> Result<(), EventPublishError>;
}

/// Fixture publisher for tests and broker-less deployments: accepts every
/// event and drops it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventPublisher;

#[async_trait]
impl EventPublisher for FixtureEventPublisher {
    async fn publish(&self, event: &CompanyEvent) -> Result<(), EventPublishError> {
        tracing::debug!(
            action = %event.action(),
            company_id = %event.company_id(),
            "no broker configured, company event dropped",
        );
        Ok(())
    }
}

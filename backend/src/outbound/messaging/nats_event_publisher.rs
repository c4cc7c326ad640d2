//! NATS-backed publisher for company mutation events.
//!
//! Each event goes to the subject `<prefix>.<action>`, so a consumer can
//! subscribe to a single action or to `<prefix>.*` for the full stream. The
//! payload is the JSON-encoded event exactly as the domain defines it.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::CompanyEvent;
use crate::domain::ports::{EventPublishError, EventPublisher};

/// Subject prefix used when none is configured.
pub const DEFAULT_SUBJECT_PREFIX: &str = "company-events";

/// Build the subject for an event from the configured prefix.
fn subject_for(prefix: &str, event: &CompanyEvent) -> String {
    format!("{prefix}.{}", event.action())
}

/// Encode an event for the wire.
fn encode_event(event: &CompanyEvent) -> Result<Vec<u8>, EventPublishError> {
    serde_json::to_vec(event)
        .map_err(|err| EventPublishError::rejected(format!("event encoding failed: {err}")))
}

/// NATS-backed implementation of the event publisher port.
///
/// Cloning shares the underlying client connection.
#[derive(Clone)]
pub struct NatsEventPublisher {
    client: async_nats::Client,
    subject_prefix: String,
}

impl NatsEventPublisher {
    /// Create a publisher over an established client connection.
    pub fn new(client: async_nats::Client, subject_prefix: impl Into<String>) -> Self {
        Self {
            client,
            subject_prefix: subject_prefix.into(),
        }
    }
}

#[async_trait]
impl EventPublisher for NatsEventPublisher {
    async fn publish(&self, event: &CompanyEvent) -> Result<(), EventPublishError> {
        let subject = subject_for(&self.subject_prefix, event);
        let payload = encode_event(event)?;

        self.client
            .publish(subject.clone(), payload.into())
            .await
            .map_err(|err| EventPublishError::unavailable(err.to_string()))?;

        debug!(
            subject = %subject,
            company_id = %event.company_id(),
            "company event published",
        );
        Ok(())
    }
}

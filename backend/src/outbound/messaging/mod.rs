//! Messaging adapters publishing domain events to external brokers.
//!
//! The only adapter today is the NATS publisher for company mutation events.
//! Publishing is best-effort by contract: the domain service logs failures
//! and never surfaces them to API callers.

mod nats_event_publisher;

pub use nats_event_publisher::{DEFAULT_SUBJECT_PREFIX, NatsEventPublisher};

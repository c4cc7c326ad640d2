//! Domain primitives, aggregates, and the services behind the driving ports.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc. Services here
//! depend only on the ports in [`ports`]; adapters live under
//! `crate::outbound`.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - TraceId (alias to `trace_id::TraceId`) — request correlation id.
//! - Company (alias to `company::Company`) — validated company aggregate.
//! - CompanyEvent (alias to `company_events::CompanyEvent`) — mutation event.
//! - User (alias to `user::User`) — registered account with password hash.
//! - LoginCredentials (alias to `auth::LoginCredentials`) — checked login
//!   input.

pub mod auth;
pub mod company;
pub mod company_events;
pub mod company_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::company::{
    COMPANY_NAME_MAX, Company, CompanyDraft, CompanyName, CompanyType, CompanyValidationError,
    DESCRIPTION_MAX, Description,
};
pub use self::company_events::{CompanyAction, CompanyEvent, CompanyEventBody, CompanyRef};
pub use self::company_service::{CompanyCommandService, CompanyQueryService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserProfile, UserValidationError, Username};
pub use self::user_service::UserService;

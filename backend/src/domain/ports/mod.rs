//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod company_command;
mod company_query;
mod company_repository;
mod event_publisher;
mod login_service;
mod password_hasher;
mod token_service;
mod user_registration;
mod user_repository;

#[cfg(test)]
pub use company_command::MockCompanyCommand;
pub use company_command::{
    CompanyCommand, CreateCompanyRequest, DeleteCompanyRequest, FixtureCompanyCommand,
    UpdateCompanyRequest,
};
#[cfg(test)]
pub use company_query::MockCompanyQuery;
pub use company_query::{CompanyQuery, FixtureCompanyQuery, GetCompanyRequest};
#[cfg(test)]
pub use company_repository::MockCompanyRepository;
pub use company_repository::{CompanyPersistenceError, CompanyRepository, UpdateOutcome};
#[cfg(test)]
pub use event_publisher::MockEventPublisher;
pub use event_publisher::{EventPublishError, EventPublisher, FixtureEventPublisher};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, LoginService};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{FixturePasswordHasher, PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use token_service::MockTokenService;
pub use token_service::{
    FIXTURE_TOKEN, FixtureTokenService, IssuedToken, TokenClaims, TokenError, TokenService,
};
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::{FixtureUserRegistration, UserRegistration};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};

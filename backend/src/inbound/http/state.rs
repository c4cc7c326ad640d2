//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CompanyCommand, CompanyQuery, FixtureCompanyCommand, FixtureCompanyQuery, FixtureLoginService,
    FixtureTokenService, FixtureUserRegistration, LoginService, TokenService, UserRegistration,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub companies: Arc<dyn CompanyCommand>,
    pub companies_query: Arc<dyn CompanyQuery>,
    pub registration: Arc<dyn UserRegistration>,
    pub login: Arc<dyn LoginService>,
    pub tokens: Arc<dyn TokenService>,
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            companies: Arc::new(FixtureCompanyCommand),
            companies_query: Arc::new(FixtureCompanyQuery),
            registration: Arc::new(FixtureUserRegistration),
            login: Arc::new(FixtureLoginService),
            tokens: Arc::new(FixtureTokenService),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub companies: Arc<dyn CompanyCommand>,
    pub companies_query: Arc<dyn CompanyQuery>,
    pub registration: Arc<dyn UserRegistration>,
    pub login: Arc<dyn LoginService>,
    pub tokens: Arc<dyn TokenService>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use company_service::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::default());
    /// let _tokens = state.tokens.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            companies,
            companies_query,
            registration,
            login,
            tokens,
        } = ports;
        Self {
            companies,
            companies_query,
            registration,
            login,
            tokens,
        }
    }
}

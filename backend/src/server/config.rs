//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use company_service::outbound::auth::JwtTokenService;
use company_service::outbound::messaging::NatsEventPublisher;
use company_service::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
///
/// Infrastructure is optional: without a pool the server runs on fixture
/// adapters, and without a publisher committed mutations are logged and
/// dropped instead of published.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) tokens: Arc<JwtTokenService>,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) events: Option<Arc<NatsEventPublisher>>,
}

impl ServerConfig {
    /// Construct a server configuration with the signing service and bind
    /// address; infrastructure attaches through the `with_*` methods.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, tokens: Arc<JwtTokenService>) -> Self {
        Self {
            bind_addr,
            tokens,
            db_pool: None,
            events: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach a broker-backed publisher for company mutation events.
    #[must_use]
    pub fn with_event_publisher(mut self, events: Arc<NatsEventPublisher>) -> Self {
        self.events = Some(events);
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(
            dead_code,
            reason = "Exercised by the configuration tests; retained for fixture access"
        )
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Configuration builder behaviour.

    use super::*;

    #[test]
    fn infrastructure_is_absent_until_attached() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().expect("literal parses");
        let config = ServerConfig::new(addr, Arc::new(JwtTokenService::new("secret")));

        assert_eq!(config.bind_addr(), addr);
        assert!(config.db_pool.is_none());
        assert!(config.events.is_none());
    }
}

//! Runtime settings loaded via OrthoConfig.
//!
//! Every value can be supplied through the environment with the
//! `COMPANY_SERVICE_` prefix, for example `COMPANY_SERVICE_DATABASE_URL`.
//! Absent values fall back to defaults suitable for local development; the
//! database and message broker are optional so the service can run against
//! fixture adapters.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_JWT_SECRET: &str = "secretkey";
const DEFAULT_EVENTS_SUBJECT: &str = "company-events";

/// Configuration values controlling the server at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COMPANY_SERVICE")]
pub struct AppSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Absent means fixture persistence.
    pub database_url: Option<String>,
    /// Secret used to sign and verify bearer tokens.
    pub jwt_secret: Option<String>,
    /// NATS server URL. Absent means company events are dropped.
    pub nats_url: Option<String>,
    /// Subject prefix for published company events.
    pub events_subject: Option<String>,
}

impl AppSettings {
    /// Parse the configured bind address, falling back to the default.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the configured value is not a valid
    /// socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Return the configured token secret, falling back to the default.
    pub fn jwt_secret(&self) -> &str {
        self.jwt_secret.as_deref().unwrap_or(DEFAULT_JWT_SECRET)
    }

    /// Return the configured event subject prefix, falling back to the default.
    pub fn events_subject(&self) -> &str {
        self.events_subject
            .as_deref()
            .unwrap_or(DEFAULT_EVENTS_SUBJECT)
    }

    /// Return the configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Return the configured NATS URL, if any.
    pub fn nats_url(&self) -> Option<&str> {
        self.nats_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and fallbacks.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("company-service")])
            .expect("settings should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("COMPANY_SERVICE_BIND_ADDR", None::<String>),
            ("COMPANY_SERVICE_DATABASE_URL", None::<String>),
            ("COMPANY_SERVICE_JWT_SECRET", None::<String>),
            ("COMPANY_SERVICE_NATS_URL", None::<String>),
            ("COMPANY_SERVICE_EVENTS_SUBJECT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.socket_addr().expect("default address parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal parses")
        );
        assert_eq!(settings.jwt_secret(), DEFAULT_JWT_SECRET);
        assert_eq!(settings.events_subject(), DEFAULT_EVENTS_SUBJECT);
        assert!(settings.database_url().is_none());
        assert!(settings.nats_url().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("COMPANY_SERVICE_BIND_ADDR", Some("127.0.0.1:9100".to_owned())),
            (
                "COMPANY_SERVICE_DATABASE_URL",
                Some("postgres://postgres@localhost/companies".to_owned()),
            ),
            ("COMPANY_SERVICE_JWT_SECRET", Some("hunter2".to_owned())),
            (
                "COMPANY_SERVICE_NATS_URL",
                Some("nats://localhost:4222".to_owned()),
            ),
            (
                "COMPANY_SERVICE_EVENTS_SUBJECT",
                Some("companies.staging".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.socket_addr().expect("override parses"),
            "127.0.0.1:9100".parse::<SocketAddr>().expect("literal parses")
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://postgres@localhost/companies")
        );
        assert_eq!(settings.jwt_secret(), "hunter2");
        assert_eq!(settings.nats_url(), Some("nats://localhost:4222"));
        assert_eq!(settings.events_subject(), "companies.staging");
    }

    #[rstest]
    fn malformed_bind_addresses_fail_to_parse() {
        let _guard = lock_env([(
            "COMPANY_SERVICE_BIND_ADDR",
            Some("not-an-address".to_owned()),
        )]);

        let settings = load_from_empty_args();
        settings
            .socket_addr()
            .expect_err("parse should reject a bad address");
    }
}

//! Service entry-point: loads settings, builds the outbound adapters, and
//! starts the HTTP server.
//!
//! The database and message broker are both optional. Without a database the
//! server answers from fixture adapters; without a broker, company events are
//! accepted and dropped. Either downgrade is logged at startup.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig as _;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use company_service::inbound::http::health::HealthState;
use company_service::outbound::auth::JwtTokenService;
use company_service::outbound::messaging::NatsEventPublisher;
use company_service::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{AppSettings, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings
        .socket_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let tokens = Arc::new(JwtTokenService::new(settings.jwt_secret()));
    let mut config = ServerConfig::new(bind_addr, tokens);

    if let Some(database_url) = settings.database_url() {
        run_pending_migrations(database_url).map_err(std::io::Error::other)?;
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    } else {
        warn!("no database configured; serving fixture data");
    }

    match settings.nats_url() {
        Some(nats_url) => {
            let client = async_nats::connect(nats_url)
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_event_publisher(Arc::new(NatsEventPublisher::new(
                client,
                settings.events_subject(),
            )));
        }
        None => warn!("no message broker configured; company events will be dropped"),
    }

    let health_state = web::Data::new(HealthState::new());
    server::create_server(health_state, config)?.await
}

//! Request desk entry-point: loads settings, selects the store and serves
//! the HTTP API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use request_desk::inbound::http::health::HealthState;
use request_desk::outbound::persistence::{DbPool, PoolConfig};
use request_desk::settings::AppSettings;
use server::{ServerConfig, create_server};

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

    let settings = AppSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| std::io::Error::other(format!("invalid bind address: {err}")))?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size))
            .await
            .map_err(|err| std::io::Error::other(err.into_message()))?;
        config = config.with_db_pool(pool);
    } else {
        warn!("no database URL configured; requests will not survive a restart");
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}

//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use request_desk::Trace;
#[cfg(debug_assertions)]
use request_desk::doc::ApiDoc;
use request_desk::domain::RequestDeskService;
use request_desk::domain::ports::RequestDesk;
use request_desk::inbound::http::configure;
use request_desk::inbound::http::health::{HealthState, live, ready};
use request_desk::inbound::http::state::HttpState;
use request_desk::outbound::memory::InMemoryRequestStore;
use request_desk::outbound::persistence::DieselRequestStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Pick the store: PostgreSQL when a pool is configured, memory otherwise.
fn build_desk(config: &ServerConfig) -> Arc<dyn RequestDesk> {
    let clock = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "request store selected");
            Arc::new(RequestDeskService::new(
                Arc::new(DieselRequestStore::new(pool.clone())),
                clock,
            ))
        }
        None => {
            info!(store = "memory", "request store selected");
            Arc::new(RequestDeskService::new(
                Arc::new(InMemoryRequestStore::new()),
                clock,
            ))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::new(build_desk(&config)));
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "request desk listening");
    health_state.mark_ready();
    Ok(server)
}

//! HTTP inbound adapter exposing the request desk under `/api`.
//!
//! Each resource answers its own methods, `OPTIONS` with 200, and anything
//! else with a JSON 405. CORS headers are attached per resource from the
//! shared [`ResourceKind`] table.

pub mod error;
pub mod feedback;
pub mod health;
pub mod requests;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpRequest, HttpResponse, Resource, web};
use tracing::debug;

use crate::domain::Error;
use crate::inbound::resource::{ResourceKind, preflight_body};

/// Register every `/api` resource.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use request_desk::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(api_resource("/requests", ResourceKind::Requests, |r| {
                r.route(web::get().to(requests::list_requests))
                    .route(web::post().to(requests::create_request))
            }))
            .service(api_resource("/requests/{id}", ResourceKind::Request, |r| {
                r.route(web::get().to(requests::get_request))
                    .route(web::delete().to(requests::delete_request))
            }))
            .service(api_resource(
                "/requests/{id}/status",
                ResourceKind::RequestStatus,
                |r| r.route(web::patch().to(requests::update_status)),
            ))
            .service(api_resource("/feedback", ResourceKind::Feedback, |r| {
                r.route(web::post().to(feedback::create_feedback))
            }))
            .default_service(web::to(unknown_route)),
    );
}

/// Build a resource with its method routes, `OPTIONS`, the 405 fallback, and
/// CORS headers. Middleware goes on last so it covers every route.
fn api_resource(
    path: &str,
    kind: ResourceKind,
    routes: impl FnOnce(Resource) -> Resource,
) -> Resource<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = kind
        .cors_headers()
        .into_iter()
        .fold(DefaultHeaders::new(), |headers, pair| headers.add(pair));
    routes(web::resource(path))
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
        .wrap(cors)
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().json(preflight_body())
}

async fn method_not_allowed(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(method = %req.method(), path = req.path(), "method not allowed");
    Err(Error::method_not_allowed("Method not allowed"))
}

async fn unknown_route(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(path = req.path(), "no api route matched");
    Err(Error::not_found("Route not found"))
}

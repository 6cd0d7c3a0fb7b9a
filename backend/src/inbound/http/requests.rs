//! Song request handlers.
//!
//! ```text
//! GET    /api/requests
//! POST   /api/requests              {"artist":"Daft Punk","title":"One More Time"}
//! GET    /api/requests/{id}
//! PATCH  /api/requests/{id}/status  {"status":"coming-up"}
//! DELETE /api/requests/{id}
//! ```
//!
//! Bodies arrive as raw bytes so malformed JSON and shape errors share one
//! validation path with the function adapter.

use actix_web::{HttpResponse, web};

use crate::domain::SongRequest;
use crate::domain::ports::DeletedRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    DeletedRequestSchema, ErrorSchema, NewSongRequestSchema, SongRequestSchema,
    StatusUpdateSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::payload;

/// List every request, newest first.
#[utoipa::path(
    get,
    path = "/api/requests",
    responses(
        (status = 200, description = "Requests, newest first", body = [SongRequestSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "listRequests"
)]
pub async fn list_requests(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<SongRequest>>> {
    let requests = state.desk.list_requests().await?;
    Ok(web::Json(requests))
}

/// Submit a new request. It starts untriaged.
#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = NewSongRequestSchema,
    responses(
        (status = 201, description = "Request created", body = SongRequestSchema),
        (status = 400, description = "Invalid request data", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "createRequest"
)]
pub async fn create_request(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let draft = payload::song_request(&body)?;
    let created = state.desk.create_request(draft).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Fetch one request.
#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    params(("id" = String, Path, description = "Request identifier (UUID)")),
    responses(
        (status = 200, description = "Request", body = SongRequestSchema),
        (status = 404, description = "Request not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "getRequest"
)]
pub async fn get_request(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<SongRequest>> {
    let id = payload::request_id(&path)?;
    Ok(web::Json(state.desk.get_request(id).await?))
}

/// Set or clear the triage status of a request.
#[utoipa::path(
    patch,
    path = "/api/requests/{id}/status",
    params(("id" = String, Path, description = "Request identifier (UUID)")),
    request_body = StatusUpdateSchema,
    responses(
        (status = 200, description = "Updated request", body = SongRequestSchema),
        (status = 400, description = "Invalid status data", body = ErrorSchema),
        (status = 404, description = "Request not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "updateRequestStatus"
)]
pub async fn update_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<SongRequest>> {
    let id = payload::request_id(&path)?;
    let update = payload::status_update(&body)?;
    Ok(web::Json(state.desk.update_status(id, update).await?))
}

/// Remove a request.
#[utoipa::path(
    delete,
    path = "/api/requests/{id}",
    params(("id" = String, Path, description = "Request identifier (UUID)")),
    responses(
        (status = 200, description = "Request deleted", body = DeletedRequestSchema),
        (status = 404, description = "Request not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "deleteRequest"
)]
pub async fn delete_request(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletedRequest>> {
    let id = payload::request_id(&path)?;
    Ok(web::Json(state.desk.delete_request(id).await?))
}

//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every request desk endpoint, the health probes and
//! the schema wrappers from [`crate::inbound::http::schemas`]. The document
//! backs Swagger UI in debug builds and the `openapi-dump` binary.

use crate::inbound::http::schemas::{
    DeletedRequestSchema, ErrorCodeSchema, ErrorSchema, FeedbackSchema, NewFeedbackSchema,
    NewSongRequestSchema, RequestStatusSchema, SongRequestSchema, StatusUpdateSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Request Desk API",
        description = "Song requests and audience feedback for a live event.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::requests::list_requests,
        crate::inbound::http::requests::create_request,
        crate::inbound::http::requests::get_request,
        crate::inbound::http::requests::update_status,
        crate::inbound::http::requests::delete_request,
        crate::inbound::http::feedback::create_feedback,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SongRequestSchema,
        NewSongRequestSchema,
        StatusUpdateSchema,
        RequestStatusSchema,
        DeletedRequestSchema,
        FeedbackSchema,
        NewFeedbackSchema,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "requests", description = "Song request lifecycle"),
        (name = "feedback", description = "Audience feedback"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

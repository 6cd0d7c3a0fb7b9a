//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape for documentation only.

#![expect(
    dead_code,
    reason = "schema wrappers are only read by utoipa during OpenAPI generation"
)]

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed input or failed validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The addressed request does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The method is not served by this resource.
    #[schema(rename = "method_not_allowed")]
    MethodNotAllowed,
    /// Unexpected server fault.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// API error payload.
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Invalid request data")]
    message: String,
    /// Correlates the response with server logs.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Validation details: `{"errors": [{"field", "code", "message"}]}`.
    details: Option<serde_json::Value>,
}

/// Triage label. Absent (`null`) means untriaged.
#[derive(ToSchema)]
#[schema(as = RequestStatus)]
pub enum RequestStatusSchema {
    #[schema(rename = "played")]
    Played,
    #[schema(rename = "coming-up")]
    ComingUp,
    #[schema(rename = "maybe")]
    Maybe,
}

/// A song request.
#[derive(ToSchema)]
#[schema(as = SongRequest)]
#[schema(rename_all = "camelCase")]
pub struct SongRequestSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: uuid::Uuid,
    #[schema(example = "Daft Punk")]
    artist: String,
    #[schema(example = "One More Time")]
    title: String,
    status: Option<RequestStatusSchema>,
    requested_at: chrono::DateTime<chrono::Utc>,
}

/// Body of `POST /api/requests`.
#[derive(ToSchema)]
#[schema(as = NewSongRequest)]
pub struct NewSongRequestSchema {
    #[schema(example = "Daft Punk", min_length = 1)]
    artist: String,
    #[schema(example = "One More Time", min_length = 1)]
    title: String,
}

/// Body of `PATCH /api/requests/{id}/status`. The key is required; `null`
/// resets the request to untriaged.
#[derive(ToSchema)]
#[schema(as = StatusUpdate)]
pub struct StatusUpdateSchema {
    status: Option<RequestStatusSchema>,
}

/// Body returned by `DELETE /api/requests/{id}`.
#[derive(ToSchema)]
#[schema(as = DeletedRequest)]
#[schema(rename_all = "camelCase")]
pub struct DeletedRequestSchema {
    #[schema(example = "Request deleted successfully")]
    message: String,
    deleted_request: SongRequestSchema,
}

/// Stored feedback.
#[derive(ToSchema)]
#[schema(as = Feedback)]
#[schema(rename_all = "camelCase")]
pub struct FeedbackSchema {
    id: uuid::Uuid,
    #[schema(example = "Great set!")]
    message: String,
    submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Body of `POST /api/feedback`.
#[derive(ToSchema)]
#[schema(as = NewFeedback)]
pub struct NewFeedbackSchema {
    #[schema(example = "Great set!", min_length = 1)]
    message: String,
}

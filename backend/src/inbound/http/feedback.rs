//! Feedback handler.
//!
//! ```text
//! POST /api/feedback {"message":"Great set!"}
//! ```
//!
//! Feedback is write-only; there is no read endpoint.

use actix_web::{HttpResponse, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, FeedbackSchema, NewFeedbackSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::payload;

/// Store attendee feedback.
#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = NewFeedbackSchema,
    responses(
        (status = 201, description = "Feedback stored", body = FeedbackSchema),
        (status = 400, description = "Invalid feedback data", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["feedback"],
    operation_id = "createFeedback"
)]
pub async fn create_feedback(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let draft = payload::feedback(&body)?;
    let stored = state.desk.create_feedback(draft).await?;
    Ok(HttpResponse::Created().json(stored))
}

//! Body and path parsing shared by every inbound adapter.
//!
//! Raw bytes become JSON here, JSON becomes a validated domain payload, and
//! any failure becomes the domain [`Error`] both adapters serialise.

use serde_json::Value;

use crate::domain::{
    Error, FieldError, FieldErrorCode, NewFeedback, NewSongRequest, RequestId, StatusUpdate,
    ValidationErrors,
};

fn invalid_body(message: &str, reason: String) -> Error {
    ValidationErrors::from(FieldError::new("body", FieldErrorCode::InvalidBody, reason))
        .into_error(message)
}

/// Parse a request body as JSON. Empty and malformed bodies are rejected.
fn parse_json(bytes: &[u8], message: &str) -> Result<Value, Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(invalid_body(message, "Request body is missing".to_owned()));
    }
    serde_json::from_slice(bytes)
        .map_err(|err| invalid_body(message, format!("request body is not valid JSON: {err}")))
}

/// Validate a request-creation body.
///
/// # Errors
/// `invalid_request` listing every failing field.
pub fn song_request(bytes: &[u8]) -> Result<NewSongRequest, Error> {
    const MESSAGE: &str = "Invalid request data";
    let body = parse_json(bytes, MESSAGE)?;
    NewSongRequest::from_json(&body).map_err(|errors| errors.into_error(MESSAGE))
}

/// Validate a status-update body.
///
/// # Errors
/// `invalid_request` describing the status field.
pub fn status_update(bytes: &[u8]) -> Result<StatusUpdate, Error> {
    const MESSAGE: &str = "Invalid status data";
    let body = parse_json(bytes, MESSAGE)?;
    StatusUpdate::from_json(&body).map_err(|errors| errors.into_error(MESSAGE))
}

/// Validate a feedback body.
///
/// # Errors
/// `invalid_request` describing the message field.
pub fn feedback(bytes: &[u8]) -> Result<NewFeedback, Error> {
    const MESSAGE: &str = "Invalid feedback data";
    let body = parse_json(bytes, MESSAGE)?;
    NewFeedback::from_json(&body).map_err(|errors| errors.into_error(MESSAGE))
}

/// Resolve a path segment to a request id.
///
/// A segment that is not a UUID cannot address any request, so it is
/// reported exactly like an unknown id.
///
/// # Errors
/// `not_found` when the segment is not a UUID.
pub fn request_id(raw: &str) -> Result<RequestId, Error> {
    RequestId::parse(raw).ok_or_else(|| Error::not_found("Request not found"))
}

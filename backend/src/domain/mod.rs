//! Domain primitives, validation, and the request desk service.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - SongRequest, RequestStatus, Feedback: stored entities.
//! - NewSongRequest, StatusUpdate, NewFeedback: validated inputs.
//! - RequestDeskService: lifecycle rules over a [`ports::RequestStore`].

pub mod error;
pub mod feedback;
pub mod ports;
pub mod request_desk_service;
pub mod song_request;
pub mod trace_id;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::feedback::{Feedback, FeedbackId, NewFeedback};
pub use self::request_desk_service::RequestDeskService;
pub use self::song_request::{
    NewSongRequest, RequestId, RequestStatus, SongRequest, StatusUpdate, UnknownStatus,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{FieldError, FieldErrorCode, ValidationErrors};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use request_desk::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Request not found"))
/// }
/// # assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;

//! Driving port exposing the request lifecycle to inbound adapters.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Error, Feedback, NewFeedback, NewSongRequest, RequestId, SongRequest, StatusUpdate,
};

/// Confirmation body returned after a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedRequest {
    /// Human-readable confirmation.
    pub message: String,
    /// The request as it was before removal.
    pub deleted_request: SongRequest,
}

/// Use-case port for the request desk.
///
/// Every method returns the domain [`Error`]; `NotFound` is reported for ids
/// that do not resolve, and store faults surface as internal errors.
#[async_trait]
pub trait RequestDesk: Send + Sync {
    /// All requests, newest first. Empty when nothing has been submitted.
    async fn list_requests(&self) -> Result<Vec<SongRequest>, Error>;

    /// Submit a new, untriaged request.
    async fn create_request(&self, draft: NewSongRequest) -> Result<SongRequest, Error>;

    /// Fetch one request.
    async fn get_request(&self, id: RequestId) -> Result<SongRequest, Error>;

    /// Move a request to another status (or back to untriaged).
    async fn update_status(
        &self,
        id: RequestId,
        update: StatusUpdate,
    ) -> Result<SongRequest, Error>;

    /// Remove a request.
    async fn delete_request(&self, id: RequestId) -> Result<DeletedRequest, Error>;

    /// Store attendee feedback.
    async fn create_feedback(&self, draft: NewFeedback) -> Result<Feedback, Error>;
}

//! Driven port for request and feedback persistence.
//!
//! Adapters translate between their storage representation and the domain
//! entities; they never stamp ids or timestamps, which the desk service owns.
//! Unknown identifiers are not errors: lookups and mutations report them as
//! `Ok(None)` and the caller decides what "absent" means.

use async_trait::async_trait;

use crate::domain::{Feedback, RequestId, RequestStatus, SongRequest};

use super::define_port_error;

define_port_error! {
    /// Errors raised by request store adapters.
    pub enum RequestStoreError {
        /// The backing store could not be reached.
        Connection { message: String } => "request store connection failed: {message}",
        /// A statement failed while executing.
        Query { message: String } => "request store query failed: {message}",
    }
}

/// Persistence port over song requests and feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Every stored request, most recent `requested_at` first.
    async fn list_requests(&self) -> Result<Vec<SongRequest>, RequestStoreError>;

    /// Persist a new request and return it as stored.
    async fn insert_request(&self, request: SongRequest) -> Result<SongRequest, RequestStoreError>;

    /// Fetch one request.
    async fn find_request(&self, id: RequestId) -> Result<Option<SongRequest>, RequestStoreError>;

    /// Overwrite the status of one request, returning the updated row.
    async fn update_status(
        &self,
        id: RequestId,
        status: Option<RequestStatus>,
    ) -> Result<Option<SongRequest>, RequestStoreError>;

    /// Remove one request, returning the removed row.
    async fn delete_request(&self, id: RequestId)
    -> Result<Option<SongRequest>, RequestStoreError>;

    /// Persist a feedback entry and return it as stored.
    async fn insert_feedback(&self, feedback: Feedback) -> Result<Feedback, RequestStoreError>;
}

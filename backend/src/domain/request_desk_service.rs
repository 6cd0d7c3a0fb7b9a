//! Request desk service implementing the [`RequestDesk`] driving port.
//!
//! The service owns identity and time: it mints UUIDs and stamps
//! `requested_at`/`submitted_at` from the injected clock, so every store
//! adapter persists exactly what it is handed.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error, info};

use crate::domain::ports::{DeletedRequest, RequestDesk, RequestStore, RequestStoreError};
use crate::domain::{
    Error, Feedback, FeedbackId, NewFeedback, NewSongRequest, RequestId, SongRequest,
    StatusUpdate,
};

const NOT_FOUND_MESSAGE: &str = "Request not found";

/// Request lifecycle service over any [`RequestStore`].
#[derive(Clone)]
pub struct RequestDeskService<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> RequestDeskService<S> {
    /// Create a service backed by `store`, reading time from `clock`.
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use request_desk::domain::RequestDeskService;
    /// use request_desk::outbound::memory::InMemoryRequestStore;
    ///
    /// let desk = RequestDeskService::new(
    ///     Arc::new(InMemoryRequestStore::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = desk;
    /// ```
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

fn map_store_error(operation: &'static str) -> impl FnOnce(RequestStoreError) -> Error {
    move |err| {
        error!(error = %err, operation, "request store operation failed");
        Error::internal(format!("{operation} failed: {err}"))
    }
}

fn not_found(id: RequestId) -> Error {
    debug!(request_id = %id, "request id did not resolve");
    Error::not_found(NOT_FOUND_MESSAGE)
}

#[async_trait]
impl<S> RequestDesk for RequestDeskService<S>
where
    S: RequestStore,
{
    async fn list_requests(&self) -> Result<Vec<SongRequest>, Error> {
        self.store
            .list_requests()
            .await
            .map_err(map_store_error("list requests"))
    }

    async fn create_request(&self, draft: NewSongRequest) -> Result<SongRequest, Error> {
        let request = SongRequest::submitted(RequestId::random(), draft, self.clock.utc());
        let stored = self
            .store
            .insert_request(request)
            .await
            .map_err(map_store_error("create request"))?;
        info!(request_id = %stored.id(), "song request submitted");
        Ok(stored)
    }

    async fn get_request(&self, id: RequestId) -> Result<SongRequest, Error> {
        self.store
            .find_request(id)
            .await
            .map_err(map_store_error("fetch request"))?
            .ok_or_else(|| not_found(id))
    }

    async fn update_status(
        &self,
        id: RequestId,
        update: StatusUpdate,
    ) -> Result<SongRequest, Error> {
        let updated = self
            .store
            .update_status(id, update.status())
            .await
            .map_err(map_store_error("update request status"))?
            .ok_or_else(|| not_found(id))?;
        info!(
            request_id = %id,
            status = updated.status().map_or("new", |s| s.as_str()),
            "request status updated"
        );
        Ok(updated)
    }

    async fn delete_request(&self, id: RequestId) -> Result<DeletedRequest, Error> {
        let removed = self
            .store
            .delete_request(id)
            .await
            .map_err(map_store_error("delete request"))?
            .ok_or_else(|| not_found(id))?;
        info!(request_id = %id, "request deleted");
        Ok(DeletedRequest {
            message: "Request deleted successfully".to_owned(),
            deleted_request: removed,
        })
    }

    async fn create_feedback(&self, draft: NewFeedback) -> Result<Feedback, Error> {
        let feedback = draft.into_feedback(FeedbackId::random(), self.clock.utc());
        let stored = self
            .store
            .insert_feedback(feedback)
            .await
            .map_err(map_store_error("submit feedback"))?;
        info!(feedback_id = %stored.id(), "feedback submitted");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests;

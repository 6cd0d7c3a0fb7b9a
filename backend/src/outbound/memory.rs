//! Process-local `RequestStore` used when no database is configured.
//!
//! State lives for the lifetime of the process and is lost on restart. Locks
//! are never held across an `.await`, so the adapter is safe to share between
//! actix workers.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{RequestStore, RequestStoreError};
use crate::domain::{Feedback, FeedbackId, RequestId, RequestStatus, SongRequest};

/// In-memory implementation of the [`RequestStore`] port.
#[derive(Debug, Default)]
pub struct InMemoryRequestStore {
    requests: RwLock<HashMap<RequestId, SongRequest>>,
    feedback: RwLock<HashMap<FeedbackId, Feedback>>,
}

impl InMemoryRequestStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn feedback_count(&self) -> usize {
        self.feedback
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn read_requests(&self) -> RwLockReadGuard<'_, HashMap<RequestId, SongRequest>> {
        self.requests.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_requests(&self) -> RwLockWriteGuard<'_, HashMap<RequestId, SongRequest>> {
        self.requests.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Newest first; ties fall back to id so the order is total.
pub(crate) fn newest_first(requests: &mut [SongRequest]) {
    requests.sort_by(|a, b| {
        b.requested_at()
            .cmp(&a.requested_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
}

#[async_trait]
impl RequestStore for InMemoryRequestStore {
    async fn list_requests(&self) -> Result<Vec<SongRequest>, RequestStoreError> {
        let mut listed: Vec<SongRequest> = self.read_requests().values().cloned().collect();
        newest_first(&mut listed);
        Ok(listed)
    }

    async fn insert_request(&self, request: SongRequest) -> Result<SongRequest, RequestStoreError> {
        self.write_requests().insert(request.id(), request.clone());
        Ok(request)
    }

    async fn find_request(&self, id: RequestId) -> Result<Option<SongRequest>, RequestStoreError> {
        Ok(self.read_requests().get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: RequestId,
        status: Option<RequestStatus>,
    ) -> Result<Option<SongRequest>, RequestStoreError> {
        let mut requests = self.write_requests();
        Ok(requests.get_mut(&id).map(|request| {
            request.set_status(status);
            request.clone()
        }))
    }

    async fn delete_request(
        &self,
        id: RequestId,
    ) -> Result<Option<SongRequest>, RequestStoreError> {
        Ok(self.write_requests().remove(&id))
    }

    async fn insert_feedback(&self, feedback: Feedback) -> Result<Feedback, RequestStoreError> {
        self.feedback
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(feedback.id(), feedback.clone());
        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::domain::{NewFeedback, NewSongRequest};
    use crate::test_support::store_contract::assert_store_contract;

    #[rstest]
    #[tokio::test]
    async fn satisfies_the_store_contract() {
        assert_store_contract(&InMemoryRequestStore::new()).await;
    }

    #[rstest]
    #[tokio::test]
    async fn feedback_is_counted() {
        let store = InMemoryRequestStore::new();
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 23, 0, 0).single().expect("timestamp");
        let draft = NewFeedback::from_json(&json!({ "message": "Encore!" })).expect("valid");

        store
            .insert_feedback(draft.into_feedback(FeedbackId::random(), at))
            .await
            .expect("insert feedback");

        assert_eq!(store.feedback_count(), 1);
    }

    #[rstest]
    fn equal_timestamps_order_by_id() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 21, 0, 0).single().expect("timestamp");
        let draft = || NewSongRequest::try_new("Daft Punk", "Aerodynamic").expect("valid");
        let low = SongRequest::submitted(RequestId::from_uuid(uuid::Uuid::from_u128(1)), draft(), at);
        let high =
            SongRequest::submitted(RequestId::from_uuid(uuid::Uuid::from_u128(2)), draft(), at);
        let mut requests = vec![low.clone(), high.clone()];

        newest_first(&mut requests);

        assert_eq!(requests, vec![high, low]);
    }

    #[rstest]
    #[tokio::test]
    async fn concurrent_inserts_are_all_kept() {
        let store = Arc::new(InMemoryRequestStore::new());
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 21, 0, 0).single().expect("timestamp");
        let mut handles = Vec::new();
        for n in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let draft = NewSongRequest::try_new("Caribou", format!("Track {n}")).expect("valid");
                store
                    .insert_request(SongRequest::submitted(RequestId::random(), draft, at))
                    .await
                    .expect("insert");
            }));
        }
        for handle in handles {
            handle.await.expect("task completes");
        }

        assert_eq!(store.list_requests().await.expect("list").len(), 16);
    }
}

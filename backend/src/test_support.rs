//! Test utilities shared by unit tests and the `tests/` suites.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature, which the
//! crate enables for its own integration tests via a dev-dependency.

use std::sync::Mutex;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

/// Clock that advances by a fixed step every time it is read.
///
/// Successive submissions therefore get strictly increasing timestamps,
/// which makes ordering assertions deterministic.
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: TimeDelta,
}

impl SteppingClock {
    /// Start at `start`, advancing by `step` per read.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    /// Start at 2026-10-19T20:00:00Z, one second per read.
    ///
    /// # Panics
    /// Panics if the fixed start timestamp is invalid, which it is not.
    #[must_use]
    pub fn starting_at_doors_open() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 10, 19, 20, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("fixture timestamp is valid"));
        Self::new(start, TimeDelta::seconds(1))
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self
            .next
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let now = *next;
        *next = now + self.step;
        now
    }
}

pub mod store_contract {
    //! Behavioural contract every [`RequestStore`] adapter must satisfy.
    //!
    //! The in-memory adapter runs it as a unit test; the Diesel adapter runs
    //! it against embedded PostgreSQL.

    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    use crate::domain::ports::RequestStore;
    use crate::domain::{
        FeedbackId, NewFeedback, NewSongRequest, RequestId, RequestStatus, SongRequest,
    };

    fn at(offset_secs: i64) -> DateTime<Utc> {
        let base = Utc
            .with_ymd_and_hms(2026, 10, 19, 21, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("fixture timestamp is valid"));
        base + TimeDelta::seconds(offset_secs)
    }

    fn request(artist: &str, title: &str, offset_secs: i64) -> SongRequest {
        let draft = NewSongRequest::try_new(artist, title)
            .unwrap_or_else(|err| panic!("fixture draft is valid: {err}"));
        SongRequest::submitted(RequestId::random(), draft, at(offset_secs))
    }

    /// Run every contract check against `store`, which must start empty.
    ///
    /// # Panics
    /// Panics on the first contract violation.
    pub async fn assert_store_contract<S: RequestStore>(store: &S) {
        assert_empty_store_lists_nothing(store).await;
        assert_list_is_newest_first(store).await;
        assert_status_overwrites(store).await;
        assert_unknown_ids_are_absent(store).await;
        assert_delete_removes_only_target(store).await;
        assert_feedback_is_stored(store).await;
    }

    async fn assert_empty_store_lists_nothing<S: RequestStore>(store: &S) {
        let listed = store
            .list_requests()
            .await
            .unwrap_or_else(|err| panic!("list on empty store: {err}"));
        assert!(listed.is_empty(), "fresh store must be empty");
    }

    async fn assert_list_is_newest_first<S: RequestStore>(store: &S) {
        let oldest = request("Daft Punk", "One More Time", 0);
        let newest = request("Robyn", "Dancing On My Own", 120);
        let middle = request("Kylie Minogue", "Can't Get You Out of My Head", 60);
        for entry in [&oldest, &newest, &middle] {
            let stored = store
                .insert_request(entry.clone())
                .await
                .unwrap_or_else(|err| panic!("insert request: {err}"));
            assert_eq!(&stored, entry, "insert returns the entity as given");
        }

        let listed = store
            .list_requests()
            .await
            .unwrap_or_else(|err| panic!("list requests: {err}"));
        let ids: Vec<RequestId> = listed.iter().map(SongRequest::id).collect();
        assert_eq!(ids, [newest.id(), middle.id(), oldest.id()]);
    }

    async fn assert_status_overwrites<S: RequestStore>(store: &S) {
        let entry = request("Fatboy Slim", "Praise You", 300);
        store
            .insert_request(entry.clone())
            .await
            .unwrap_or_else(|err| panic!("insert request: {err}"));

        let labels = [
            Some(RequestStatus::ComingUp),
            Some(RequestStatus::Played),
            Some(RequestStatus::Maybe),
            None,
        ];
        for status in labels {
            let updated = store
                .update_status(entry.id(), status)
                .await
                .unwrap_or_else(|err| panic!("update status: {err}"))
                .unwrap_or_else(|| panic!("existing request must update"));
            assert_eq!(updated.status(), status);
            assert_eq!(updated.requested_at(), entry.requested_at());

            let fetched = store
                .find_request(entry.id())
                .await
                .unwrap_or_else(|err| panic!("find request: {err}"))
                .unwrap_or_else(|| panic!("existing request must be found"));
            assert_eq!(fetched.status(), status);
        }
    }

    async fn assert_unknown_ids_are_absent<S: RequestStore>(store: &S) {
        let unknown = RequestId::random();
        let found = store
            .find_request(unknown)
            .await
            .unwrap_or_else(|err| panic!("find unknown: {err}"));
        assert!(found.is_none());
        let updated = store
            .update_status(unknown, Some(RequestStatus::Played))
            .await
            .unwrap_or_else(|err| panic!("update unknown: {err}"));
        assert!(updated.is_none());
        let deleted = store
            .delete_request(unknown)
            .await
            .unwrap_or_else(|err| panic!("delete unknown: {err}"));
        assert!(deleted.is_none());
    }

    async fn assert_delete_removes_only_target<S: RequestStore>(store: &S) {
        let before = store
            .list_requests()
            .await
            .unwrap_or_else(|err| panic!("list requests: {err}"));
        let target = request("Underworld", "Born Slippy", 600);
        store
            .insert_request(target.clone())
            .await
            .unwrap_or_else(|err| panic!("insert request: {err}"));

        let removed = store
            .delete_request(target.id())
            .await
            .unwrap_or_else(|err| panic!("delete request: {err}"));
        assert_eq!(removed, Some(target.clone()));

        let after = store
            .list_requests()
            .await
            .unwrap_or_else(|err| panic!("list requests: {err}"));
        assert_eq!(after, before, "delete must not touch other requests");
        let again = store
            .delete_request(target.id())
            .await
            .unwrap_or_else(|err| panic!("repeat delete: {err}"));
        assert!(again.is_none());
    }

    async fn assert_feedback_is_stored<S: RequestStore>(store: &S) {
        let draft = NewFeedback::from_json(&serde_json::json!({ "message": "Great set!" }))
            .unwrap_or_else(|err| panic!("fixture feedback is valid: {err}"));
        let feedback = draft.into_feedback(FeedbackId::random(), at(900));
        let stored = store
            .insert_feedback(feedback.clone())
            .await
            .unwrap_or_else(|err| panic!("insert feedback: {err}"));
        assert_eq!(stored, feedback);
    }
}

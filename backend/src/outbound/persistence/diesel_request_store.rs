//! PostgreSQL-backed `RequestStore` implementation using Diesel ORM.
//!
//! Every operation is a single statement; mutations use `RETURNING` so the
//! stored row comes back without a second round trip.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{RequestStore, RequestStoreError};
use crate::domain::{Feedback, FeedbackId, RequestId, RequestStatus, SongRequest};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FeedbackRow, NewRequestRow, RequestRow};
use super::pool::DbPool;
use super::schema::{feedback, requests};

/// Diesel-backed implementation of the [`RequestStore`] port.
#[derive(Clone)]
pub struct DieselRequestStore {
    pool: DbPool,
}

impl DieselRequestStore {
    /// Create a store over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Decode a stored status. Values outside the enum can only come from
/// out-of-band writes; they are read back as untriaged.
fn decode_status(id: uuid::Uuid, raw: Option<String>) -> Option<RequestStatus> {
    let raw = raw?;
    match raw.parse() {
        Ok(status) => Some(status),
        Err(_) => {
            warn!(value = %raw, request_id = %id, "unrecognised status value, treating as new");
            None
        }
    }
}

fn row_to_request(row: RequestRow) -> SongRequest {
    let status = decode_status(row.id, row.status);
    SongRequest::new(
        RequestId::from_uuid(row.id),
        row.artist,
        row.title,
        status,
        row.requested_at,
    )
}

fn row_to_feedback(row: FeedbackRow) -> Feedback {
    Feedback::new(FeedbackId::from_uuid(row.id), row.message, row.submitted_at)
}

#[async_trait]
impl RequestStore for DieselRequestStore {
    async fn list_requests(&self) -> Result<Vec<SongRequest>, RequestStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RequestRow> = requests::table
            .select(RequestRow::as_select())
            .order_by((requests::requested_at.desc(), requests::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_request).collect())
    }

    async fn insert_request(&self, request: SongRequest) -> Result<SongRequest, RequestStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewRequestRow {
            id: *request.id().as_uuid(),
            artist: request.artist(),
            title: request.title(),
            status: request.status().map(RequestStatus::as_str),
            requested_at: request.requested_at(),
        };

        let row: RequestRow = diesel::insert_into(requests::table)
            .values(&new_row)
            .returning(RequestRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_request(row))
    }

    async fn find_request(&self, id: RequestId) -> Result<Option<SongRequest>, RequestStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RequestRow> = requests::table
            .find(*id.as_uuid())
            .select(RequestRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_request))
    }

    async fn update_status(
        &self,
        id: RequestId,
        status: Option<RequestStatus>,
    ) -> Result<Option<SongRequest>, RequestStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RequestRow> = diesel::update(requests::table.find(*id.as_uuid()))
            .set(requests::status.eq(status.map(RequestStatus::as_str)))
            .returning(RequestRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_request))
    }

    async fn delete_request(
        &self,
        id: RequestId,
    ) -> Result<Option<SongRequest>, RequestStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RequestRow> = diesel::delete(requests::table.find(*id.as_uuid()))
            .returning(RequestRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_request))
    }

    async fn insert_feedback(&self, entry: Feedback) -> Result<Feedback, RequestStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = FeedbackRow {
            id: *entry.id().as_uuid(),
            message: entry.message().to_owned(),
            submitted_at: entry.submitted_at(),
        };

        let row: FeedbackRow = diesel::insert_into(feedback::table)
            .values(&new_row)
            .returning(FeedbackRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_feedback(row))
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage; statement behaviour is exercised by the
    //! embedded PostgreSQL suite in `tests/diesel_request_store.rs`.
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use uuid::Uuid;

    fn row(status: Option<&str>) -> RequestRow {
        RequestRow {
            id: Uuid::new_v4(),
            artist: "Daft Punk".to_owned(),
            title: "One More Time".to_owned(),
            status: status.map(str::to_owned),
            requested_at: Utc
                .with_ymd_and_hms(2026, 10, 19, 21, 0, 0)
                .single()
                .expect("timestamp"),
        }
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("played"), Some(RequestStatus::Played))]
    #[case(Some("coming-up"), Some(RequestStatus::ComingUp))]
    #[case(Some("maybe"), Some(RequestStatus::Maybe))]
    #[case(Some("skipped"), None)]
    fn stored_status_is_decoded(
        #[case] stored: Option<&str>,
        #[case] expected: Option<RequestStatus>,
    ) {
        let request = row_to_request(row(stored));
        assert_eq!(request.status(), expected);
    }

    #[rstest]
    fn row_fields_are_carried_over() {
        let source = row(Some("maybe"));
        let request = row_to_request(source.clone());

        assert_eq!(request.id().as_uuid(), &source.id);
        assert_eq!(request.artist(), "Daft Punk");
        assert_eq!(request.title(), "One More Time");
        assert_eq!(request.requested_at(), source.requested_at);
    }
}

//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; the store converts them to
//! and from domain entities.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{feedback, requests};

/// Row struct for reading from the requests table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RequestRow {
    pub id: Uuid,
    pub artist: String,
    pub title: String,
    pub status: Option<String>,
    pub requested_at: DateTime<Utc>,
}

/// Insertable struct for new requests.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = requests)]
pub(crate) struct NewRequestRow<'a> {
    pub id: Uuid,
    pub artist: &'a str,
    pub title: &'a str,
    pub status: Option<&'a str>,
    pub requested_at: DateTime<Utc>,
}

/// Row struct for the feedback table, used both ways.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = feedback)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FeedbackRow {
    pub id: Uuid,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations/` exactly. The `users`
//! table exists in the migrations but is not mapped here.

diesel::table! {
    /// Song requests.
    requests (id) {
        /// Primary key: UUID v4 minted by the service.
        id -> Uuid,
        artist -> Text,
        title -> Text,
        /// `played`, `coming-up`, `maybe`, or NULL while untriaged.
        status -> Nullable<Text>,
        requested_at -> Timestamptz,
    }
}

diesel::table! {
    /// Attendee feedback. Insert only.
    feedback (id) {
        id -> Uuid,
        message -> Text,
        submitted_at -> Timestamptz,
    }
}

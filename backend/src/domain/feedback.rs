//! Free-text feedback left by attendees.
//!
//! Feedback is write-only: it is accepted and persisted, never listed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::validation::{ValidationErrors, object_body, required_text};

/// Opaque identifier of a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(Uuid);

impl FeedbackId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored feedback entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    id: FeedbackId,
    message: String,
    submitted_at: DateTime<Utc>,
}

impl Feedback {
    /// Assemble an entry from stored parts.
    #[must_use]
    pub const fn new(id: FeedbackId, message: String, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            message,
            submitted_at,
        }
    }

    /// Identifier.
    #[must_use]
    pub const fn id(&self) -> FeedbackId {
        self.id
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Submission time.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

/// Validated payload for submitting feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    message: String,
}

impl NewFeedback {
    /// Validate a raw JSON body of the form `{"message": ..}`.
    ///
    /// # Errors
    /// Reports a missing, mistyped, or empty message.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let object = object_body(body)?;
        let mut errors = ValidationErrors::new();
        match required_text(object, "message", &mut errors) {
            Some(message) => Ok(Self { message }),
            None => Err(errors),
        }
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stamp the payload into a stored entry.
    #[must_use]
    pub fn into_feedback(self, id: FeedbackId, submitted_at: DateTime<Utc>) -> Feedback {
        Feedback::new(id, self.message, submitted_at)
    }
}

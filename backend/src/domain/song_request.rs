//! Song requests and their triage status.
//!
//! A request starts untriaged (`status = None`) and the operator may move it
//! to any label, or back to untriaged, at any time. The graph has no terminal
//! state; modelling the label as an enum keeps unknown strings out once input
//! has been validated.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::validation::{
    FieldError, FieldErrorCode, ValidationErrors, object_body, required_text,
};

/// Opaque identifier of a song request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
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

    /// Parse a path segment; anything that is not a UUID cannot address a
    /// request and yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operator triage label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    /// Already played.
    Played,
    /// Queued to play soon.
    ComingUp,
    /// Under consideration.
    Maybe,
}

impl RequestStatus {
    /// Every label, in display order.
    pub const ALL: [Self; 3] = [Self::Played, Self::ComingUp, Self::Maybe];

    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Played => "played",
            Self::ComingUp => "coming-up",
            Self::Maybe => "maybe",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known status label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown request status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

/// A song request as stored and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRequest {
    id: RequestId,
    artist: String,
    title: String,
    status: Option<RequestStatus>,
    requested_at: DateTime<Utc>,
}

impl SongRequest {
    /// Assemble a request from stored parts.
    #[must_use]
    pub const fn new(
        id: RequestId,
        artist: String,
        title: String,
        status: Option<RequestStatus>,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            artist,
            title,
            status,
            requested_at,
        }
    }

    /// A freshly submitted, untriaged request.
    #[must_use]
    pub fn submitted(id: RequestId, draft: NewSongRequest, requested_at: DateTime<Utc>) -> Self {
        let NewSongRequest { artist, title } = draft;
        Self::new(id, artist, title, None, requested_at)
    }

    /// Identifier.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Artist name.
    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Song title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Triage label; `None` while untriaged.
    #[must_use]
    pub const fn status(&self) -> Option<RequestStatus> {
        self.status
    }

    /// Submission time.
    #[must_use]
    pub const fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }

    /// Replace the triage label.
    pub const fn set_status(&mut self, status: Option<RequestStatus>) {
        self.status = status;
    }
}

/// Validated payload for creating a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSongRequest {
    artist: String,
    title: String,
}

impl NewSongRequest {
    /// Validate already-typed parts.
    ///
    /// # Errors
    /// Lists `artist` and/or `title` when empty.
    pub fn try_new(
        artist: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut fields = serde_json::Map::new();
        fields.insert("artist".to_owned(), Value::String(artist.into()));
        fields.insert("title".to_owned(), Value::String(title.into()));
        Self::from_json(&Value::Object(fields))
    }

    /// Validate a raw JSON body of the form `{"artist": .., "title": ..}`.
    ///
    /// # Errors
    /// Reports every missing, mistyped, or empty field.
    ///
    /// # Examples
    /// ```
    /// use request_desk::domain::NewSongRequest;
    /// use serde_json::json;
    ///
    /// let errors = NewSongRequest::from_json(&json!({ "title": "X" })).unwrap_err();
    /// assert!(errors.has_field("artist"));
    /// ```
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let object = object_body(body)?;
        let mut errors = ValidationErrors::new();
        let artist = required_text(object, "artist", &mut errors);
        let title = required_text(object, "title", &mut errors);
        match (artist, title) {
            (Some(artist), Some(title)) => errors.finish(|| Self { artist, title }),
            _ => Err(errors),
        }
    }

    /// Artist name.
    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Song title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Validated payload for a status change. `None` resets to untriaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate(Option<RequestStatus>);

impl StatusUpdate {
    /// Wrap a target status.
    #[must_use]
    pub const fn new(status: Option<RequestStatus>) -> Self {
        Self(status)
    }

    /// Target status.
    #[must_use]
    pub const fn status(self) -> Option<RequestStatus> {
        self.0
    }

    /// Validate a raw JSON body of the form `{"status": <label or null>}`.
    ///
    /// The key must be present; an explicit `null` is accepted.
    ///
    /// # Errors
    /// Reports a missing key, a non-string value, or an unknown label.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let object = object_body(body)?;
        match object.get("status") {
            None => Err(FieldError::new(
                "status",
                FieldErrorCode::MissingField,
                "status is required",
            )
            .into()),
            Some(Value::Null) => Ok(Self(None)),
            Some(Value::String(raw)) => raw.parse::<RequestStatus>().map(|s| Self(Some(s))).map_err(
                |err| {
                    FieldError::new(
                        "status",
                        FieldErrorCode::InvalidStatus,
                        format!("{err}; expected one of played, coming-up, maybe, or null"),
                    )
                    .into()
                },
            ),
            Some(_) => Err(FieldError::new(
                "status",
                FieldErrorCode::InvalidType,
                "status must be a string or null",
            )
            .into()),
        }
    }
}

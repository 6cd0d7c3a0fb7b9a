//! Resource table shared by the HTTP and function adapters.
//!
//! Both adapters expose the same four resources with the same method sets
//! and CORS headers. The HTTP adapter registers them with actix; the function
//! adapter matches them against the trailing segments of an event path.

use serde_json::{Value, json};

/// `Access-Control-Allow-Origin` value for every resource.
pub const ALLOW_ORIGIN: &str = "*";
/// `Access-Control-Allow-Headers` value for every resource.
pub const ALLOW_HEADERS: &str = "Content-Type";

/// One addressable API resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// `/requests`
    Requests,
    /// `/requests/{id}`
    Request,
    /// `/requests/{id}/status`
    RequestStatus,
    /// `/feedback`
    Feedback,
}

impl ResourceKind {
    /// Value for `Access-Control-Allow-Methods`, `OPTIONS` included.
    #[must_use]
    pub const fn allowed_methods(self) -> &'static str {
        match self {
            Self::Requests => "GET, POST, OPTIONS",
            Self::Request => "GET, DELETE, OPTIONS",
            Self::RequestStatus => "PATCH, OPTIONS",
            Self::Feedback => "POST, OPTIONS",
        }
    }

    /// CORS headers sent with every response from this resource.
    #[must_use]
    pub const fn cors_headers(self) -> [(&'static str, &'static str); 3] {
        [
            ("Access-Control-Allow-Origin", ALLOW_ORIGIN),
            ("Access-Control-Allow-Methods", self.allowed_methods()),
            ("Access-Control-Allow-Headers", ALLOW_HEADERS),
        ]
    }
}

/// Body returned for `OPTIONS`.
#[must_use]
pub fn preflight_body() -> Value {
    json!({ "message": "CORS preflight" })
}

/// A resource matched from a path, with the raw id segment when it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMatch<'a> {
    pub kind: ResourceKind,
    pub id: Option<&'a str>,
}

impl<'a> ResourceMatch<'a> {
    const fn new(kind: ResourceKind, id: Option<&'a str>) -> Self {
        Self { kind, id }
    }

    /// Match the trailing segments of `path`, ignoring any deployment prefix
    /// such as `/api` or `/.netlify/functions`.
    ///
    /// The single-purpose function paths `status[/{id}]` and
    /// `delete-request[/{id}]` are accepted as aliases; without an id segment
    /// the caller supplies the id some other way.
    ///
    /// # Examples
    /// ```
    /// use request_desk::inbound::resource::{ResourceKind, ResourceMatch};
    ///
    /// let matched = ResourceMatch::from_path("/.netlify/functions/requests/abc/status")
    ///     .expect("known resource");
    /// assert_eq!(matched.kind, ResourceKind::RequestStatus);
    /// assert_eq!(matched.id, Some("abc"));
    /// ```
    #[must_use]
    pub fn from_path(path: &'a str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match *segments.as_slice() {
            // Id-bearing shapes first so an id that spells a resource name
            // stays an id.
            [.., "requests", id, "status"] => Some(Self::new(ResourceKind::RequestStatus, Some(id))),
            [.., "requests", id] => Some(Self::new(ResourceKind::Request, Some(id))),
            [.., "status", id] => Some(Self::new(ResourceKind::RequestStatus, Some(id))),
            [.., "delete-request", id] => Some(Self::new(ResourceKind::Request, Some(id))),
            [.., "requests"] => Some(Self::new(ResourceKind::Requests, None)),
            [.., "feedback"] => Some(Self::new(ResourceKind::Feedback, None)),
            [.., "status"] => Some(Self::new(ResourceKind::RequestStatus, None)),
            [.., "delete-request"] => Some(Self::new(ResourceKind::Request, None)),
            _ => None,
        }
    }
}

//! Framework-free adapter for serverless function platforms.
//!
//! The platform hands over an event with the method, the full path
//! (including any deployment prefix), and an optional body string. The
//! adapter routes on the trailing path segments with the same resource table,
//! status codes, JSON bodies and CORS headers as the HTTP adapter.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::ports::RequestDesk;
use crate::domain::{Error, TRACE_ID_HEADER, TraceId};
use crate::inbound::payload;
use crate::inbound::resource::{ResourceKind, ResourceMatch, preflight_body};

/// Incoming function invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub body: Option<String>,
    /// `id` here addresses a request when the path carries none.
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl FunctionEvent {
    /// Event without a body or query string.
    pub fn new(http_method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Attach a body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    fn query_id(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get("id"))
            .map(String::as_str)
    }

    fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().map_or(&[], str::as_bytes)
    }
}

/// Result handed back to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    /// Parse the body as JSON.
    ///
    /// # Errors
    /// Returns the parse error when the body is not JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

const FALLBACK_ERROR_BODY: &str = r#"{"code":"internal_error","message":"Internal server error"}"#;

/// Successful outcome before serialisation.
struct Reply {
    status: u16,
    body: Value,
}

impl Reply {
    fn new(status: u16, body: impl Serialize) -> Result<Self, Error> {
        let body = serde_json::to_value(body)
            .map_err(|err| Error::internal(format!("response serialisation failed: {err}")))?;
        Ok(Self { status, body })
    }
}

/// Handle one function invocation against `desk`.
///
/// Never fails: every error becomes a response with the matching status.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use request_desk::domain::RequestDeskService;
/// use request_desk::inbound::function::{FunctionEvent, handle};
/// use request_desk::outbound::memory::InMemoryRequestStore;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let desk = RequestDeskService::new(
///     Arc::new(InMemoryRequestStore::new()),
///     Arc::new(DefaultClock),
/// );
/// let res = handle(&desk, FunctionEvent::new("GET", "/.netlify/functions/requests")).await;
/// assert_eq!(res.status_code, 200);
/// assert_eq!(res.body, "[]");
/// # });
/// ```
pub async fn handle(desk: &dyn RequestDesk, event: FunctionEvent) -> FunctionResponse {
    let trace_id = TraceId::generate();
    TraceId::scope(trace_id, async move {
        let matched = ResourceMatch::from_path(&event.path);
        let kind = matched.map(|m| m.kind);
        let outcome = match matched {
            Some(matched) => dispatch(desk, &event, matched).await,
            None => Err(Error::not_found("Route not found")),
        };
        let response = render(outcome, kind, trace_id);
        info!(
            method = %event.http_method,
            path = %event.path,
            status = response.status_code,
            "function invocation handled"
        );
        response
    })
    .await
}

async fn dispatch(
    desk: &dyn RequestDesk,
    event: &FunctionEvent,
    matched: ResourceMatch<'_>,
) -> Result<Reply, Error> {
    let method = event.http_method.to_ascii_uppercase();
    if method == "OPTIONS" {
        return Reply::new(200, preflight_body());
    }
    let raw_id = || matched.id.or_else(|| event.query_id()).unwrap_or_default();

    match (matched.kind, method.as_str()) {
        (ResourceKind::Requests, "GET") => Reply::new(200, desk.list_requests().await?),
        (ResourceKind::Requests, "POST") => {
            let draft = payload::song_request(event.body_bytes())?;
            Reply::new(201, desk.create_request(draft).await?)
        }
        (ResourceKind::Request, "GET") => {
            let id = payload::request_id(raw_id())?;
            Reply::new(200, desk.get_request(id).await?)
        }
        (ResourceKind::Request, "DELETE") => {
            let id = payload::request_id(raw_id())?;
            Reply::new(200, desk.delete_request(id).await?)
        }
        (ResourceKind::RequestStatus, "PATCH") => {
            let id = payload::request_id(raw_id())?;
            let update = payload::status_update(event.body_bytes())?;
            Reply::new(200, desk.update_status(id, update).await?)
        }
        (ResourceKind::Feedback, "POST") => {
            let draft = payload::feedback(event.body_bytes())?;
            Reply::new(201, desk.create_feedback(draft).await?)
        }
        _ => {
            debug!(%method, path = %event.path, "method not allowed");
            Err(Error::method_not_allowed("Method not allowed"))
        }
    }
}

fn render(
    outcome: Result<Reply, Error>,
    kind: Option<ResourceKind>,
    trace_id: TraceId,
) -> FunctionResponse {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_owned(), "application/json".to_owned());
    headers.insert(TRACE_ID_HEADER.to_owned(), trace_id.to_string());
    if let Some(kind) = kind {
        for (name, value) in kind.cors_headers() {
            headers.insert(name.to_owned(), value.to_owned());
        }
    }

    let (status_code, body) = match outcome {
        Ok(reply) => (reply.status, reply.body.to_string()),
        Err(err) => {
            let body = serde_json::to_string(&err.redacted())
                .unwrap_or_else(|_| FALLBACK_ERROR_BODY.to_owned());
            (err.code().http_status(), body)
        }
    };

    FunctionResponse {
        status_code,
        headers,
        body,
    }
}

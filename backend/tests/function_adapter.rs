//! Request lifecycle through the serverless function adapter.
//!
//! Paths carry the platform prefix the adapter strips when routing.

use std::sync::Arc;

use request_desk::domain::RequestDeskService;
use request_desk::inbound::function::{FunctionEvent, FunctionResponse, handle};
use request_desk::outbound::memory::InMemoryRequestStore;
use request_desk::test_support::SteppingClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const PREFIX: &str = "/.netlify/functions";

type Desk = RequestDeskService<InMemoryRequestStore>;

#[fixture]
fn desk() -> Desk {
    RequestDeskService::new(
        Arc::new(InMemoryRequestStore::new()),
        Arc::new(SteppingClock::starting_at_doors_open()),
    )
}

async fn invoke(desk: &Desk, method: &str, path: &str, body: Option<Value>) -> FunctionResponse {
    let mut event = FunctionEvent::new(method, format!("{PREFIX}{path}"));
    if let Some(body) = body {
        event = event.with_body(body.to_string());
    }
    handle(desk, event).await
}

#[rstest]
#[tokio::test]
async fn lifecycle_matches_the_http_surface(desk: Desk) {
    let created = invoke(
        &desk,
        "POST",
        "/requests",
        Some(json!({ "artist": "Daft Punk", "title": "One More Time" })),
    )
    .await;
    assert_eq!(created.status_code, 201);
    let created = created.json().expect("json");
    let id = created["id"].as_str().expect("id").to_owned();

    let updated = invoke(
        &desk,
        "PATCH",
        &format!("/requests/{id}/status"),
        Some(json!({ "status": "coming-up" })),
    )
    .await;
    assert_eq!(updated.status_code, 200);
    assert_eq!(updated.json().expect("json")["status"], "coming-up");

    let listed = invoke(&desk, "GET", "/requests", None).await;
    assert_eq!(listed.status_code, 200);
    let listed = listed.json().expect("json");
    assert_eq!(listed[0]["id"], json!(id));
    assert_eq!(listed[0]["status"], "coming-up");

    let deleted = invoke(&desk, "DELETE", &format!("/requests/{id}"), None).await;
    assert_eq!(deleted.status_code, 200);
    assert_eq!(deleted.json().expect("json")["deletedRequest"]["id"], json!(id));

    let gone = invoke(&desk, "GET", &format!("/requests/{id}"), None).await;
    assert_eq!(gone.status_code, 404);
}

#[rstest]
#[tokio::test]
async fn feedback_is_accepted_but_not_listed(desk: Desk) {
    let created = invoke(&desk, "POST", "/feedback", Some(json!({ "message": "Louder!" }))).await;
    assert_eq!(created.status_code, 201);
    assert_eq!(created.json().expect("json")["message"], "Louder!");

    let listed = invoke(&desk, "GET", "/feedback", None).await;
    assert_eq!(listed.status_code, 405);
    assert_eq!(listed.json().expect("json")["code"], "method_not_allowed");
}

#[rstest]
#[tokio::test]
async fn responses_carry_json_and_cors_headers(desk: Desk) {
    let res = invoke(&desk, "GET", "/requests", None).await;

    assert_eq!(res.headers["Content-Type"], "application/json");
    assert_eq!(res.headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(res.headers["Access-Control-Allow-Methods"], "GET, POST, OPTIONS");
    assert_eq!(res.headers["Access-Control-Allow-Headers"], "Content-Type");
}

#[rstest]
#[case(json!({ "artist": "" , "title": "x" }), "artist")]
#[case(json!({}), "artist")]
#[tokio::test]
async fn validation_failures_name_the_field(
    desk: Desk,
    #[case] body: Value,
    #[case] field: &str,
) {
    let res = invoke(&desk, "POST", "/requests", Some(body)).await;

    assert_eq!(res.status_code, 400);
    let body = res.json().expect("json");
    assert_eq!(body["details"]["errors"][0]["field"], field);
}

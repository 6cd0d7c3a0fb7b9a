//! Tests for the request desk service.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::domain::ports::MockRequestStore;
use crate::domain::{ErrorCode, RequestStatus};
use crate::outbound::memory::InMemoryRequestStore;
use crate::test_support::SteppingClock;

fn memory_desk() -> RequestDeskService<InMemoryRequestStore> {
    RequestDeskService::new(
        Arc::new(InMemoryRequestStore::new()),
        Arc::new(SteppingClock::starting_at_doors_open()),
    )
}

fn mock_desk(store: MockRequestStore) -> RequestDeskService<MockRequestStore> {
    RequestDeskService::new(Arc::new(store), Arc::new(DefaultClock))
}

fn draft(artist: &str, title: &str) -> NewSongRequest {
    NewSongRequest::try_new(artist, title).expect("valid draft")
}

fn unreachable() -> RequestStoreError {
    RequestStoreError::connection("connection refused")
}

#[tokio::test]
async fn created_requests_start_untriaged_with_fresh_ids() {
    let desk = memory_desk();

    let first = desk
        .create_request(draft("Daft Punk", "One More Time"))
        .await
        .expect("create succeeds");
    let second = desk
        .create_request(draft("Daft Punk", "One More Time"))
        .await
        .expect("duplicate create succeeds");

    assert_eq!(first.status(), None);
    assert_eq!(first.artist(), "Daft Punk");
    assert_ne!(first.id(), second.id(), "duplicates are distinct requests");
    assert!(second.requested_at() > first.requested_at());
}

#[tokio::test]
async fn list_returns_newest_first() {
    let desk = memory_desk();
    let mut created = Vec::new();
    for (artist, title) in [
        ("Daft Punk", "One More Time"),
        ("Robyn", "Dancing On My Own"),
        ("Underworld", "Born Slippy"),
    ] {
        created.push(desk.create_request(draft(artist, title)).await.expect("create"));
    }

    let listed = desk.list_requests().await.expect("list succeeds");

    created.reverse();
    assert_eq!(listed, created);
}

#[tokio::test]
async fn list_is_empty_before_any_submission() {
    let listed = memory_desk().list_requests().await.expect("list succeeds");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn status_moves_freely_between_labels_and_back_to_untriaged() {
    let desk = memory_desk();
    let created = desk
        .create_request(draft("Daft Punk", "One More Time"))
        .await
        .expect("create");

    let path = [
        Some(RequestStatus::Played),
        Some(RequestStatus::Maybe),
        Some(RequestStatus::ComingUp),
        Some(RequestStatus::ComingUp),
        None,
        Some(RequestStatus::Played),
    ];
    for status in path {
        let updated = desk
            .update_status(created.id(), StatusUpdate::new(status))
            .await
            .expect("every transition is allowed");
        assert_eq!(updated.status(), status);
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.artist(), created.artist());
        assert_eq!(updated.title(), created.title());
        assert_eq!(updated.requested_at(), created.requested_at());
    }
}

#[rstest]
#[case::get("get")]
#[case::update("update")]
#[case::delete("delete")]
#[tokio::test]
async fn unknown_ids_report_not_found(#[case] operation: &str) {
    let desk = memory_desk();
    let id = RequestId::random();

    let err = match operation {
        "get" => desk.get_request(id).await.map(|_| ()),
        "update" => desk
            .update_status(id, StatusUpdate::new(Some(RequestStatus::Played)))
            .await
            .map(|_| ()),
        _ => desk.delete_request(id).await.map(|_| ()),
    }
    .expect_err("unknown id must fail");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "Request not found");
}

#[tokio::test]
async fn delete_returns_the_removed_request_and_leaves_others() {
    let desk = memory_desk();
    let keep = desk.create_request(draft("Robyn", "Hang With Me")).await.expect("create");
    let target = desk
        .create_request(draft("Daft Punk", "One More Time"))
        .await
        .expect("create");

    let deleted = desk.delete_request(target.id()).await.expect("delete succeeds");

    assert_eq!(deleted.message, "Request deleted successfully");
    assert_eq!(deleted.deleted_request, target);
    assert_eq!(desk.list_requests().await.expect("list"), vec![keep]);
    let err = desk
        .delete_request(target.id())
        .await
        .expect_err("second delete fails");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn feedback_is_stamped_and_returned() {
    let desk = memory_desk();
    let body = json!({ "message": "Great set!" });

    let stored = desk
        .create_feedback(NewFeedback::from_json(&body).expect("valid feedback"))
        .await
        .expect("feedback accepted");

    assert_eq!(stored.message(), "Great set!");
}

#[tokio::test]
async fn store_faults_become_internal_errors() {
    let mut store = MockRequestStore::new();
    store
        .expect_list_requests()
        .times(1)
        .return_once(|| Err(unreachable()));

    let err = mock_desk(store)
        .list_requests()
        .await
        .expect_err("store fault surfaces");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert!(err.message().contains("connection refused"));
    assert_eq!(err.redacted().message(), "Internal server error");
}

#[tokio::test]
async fn create_passes_an_untriaged_request_to_the_store() {
    let mut store = MockRequestStore::new();
    store
        .expect_insert_request()
        .withf(|request| request.status().is_none() && request.title() == "Praise You")
        .times(1)
        .returning(Ok);

    let created = mock_desk(store)
        .create_request(draft("Fatboy Slim", "Praise You"))
        .await
        .expect("create succeeds");

    assert_eq!(created.artist(), "Fatboy Slim");
}

#[tokio::test]
async fn update_fault_is_not_mistaken_for_not_found() {
    let mut store = MockRequestStore::new();
    store
        .expect_update_status()
        .times(1)
        .return_once(|_, _| Err(RequestStoreError::query("deadlock detected")));

    let err = mock_desk(store)
        .update_status(RequestId::random(), StatusUpdate::new(None))
        .await
        .expect_err("fault surfaces");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn feedback_fault_becomes_internal_error() {
    let mut store = MockRequestStore::new();
    store
        .expect_insert_feedback()
        .times(1)
        .return_once(|_| Err(unreachable()));
    let body = json!({ "message": "Too loud" });

    let err = mock_desk(store)
        .create_feedback(NewFeedback::from_json(&body).expect("valid feedback"))
        .await
        .expect_err("fault surfaces");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

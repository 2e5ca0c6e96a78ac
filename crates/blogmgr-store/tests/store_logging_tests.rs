#![allow(clippy::unwrap_used, clippy::expect_used)]

// Store operations emit start/end/end_error events

use blogmgr_core::logging_facility::test_capture::init_test_capture;
use blogmgr_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use blogmgr_store::BlogStore;

#[test]
fn test_create_post_logs_start_and_end() {
    let capture = init_test_capture();
    let mut store = BlogStore::open_in_memory().unwrap();
    let title = "logging-create-unique-1";

    store.create_post(title, "body", "go").unwrap();

    let events: Vec<_> = capture
        .events_for_op("create_post")
        .into_iter()
        .filter(|e| e.field("title") == Some(title))
        .collect();
    assert_eq!(events.len(), 1, "one start event carries the title");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field("tag_count"), Some("1"));
    capture.assert_event_exists("create_post", EVENT_END);
}

#[test]
fn test_duplicate_title_logs_error_code() {
    let capture = init_test_capture();
    let mut store = BlogStore::open_in_memory().unwrap();

    store.create_post("logging-dup-unique-2", "body", "").unwrap();
    store
        .create_post("logging-dup-unique-2", "body", "")
        .unwrap_err();

    let found = capture.count_events(|e| {
        e.op.as_deref() == Some("create_post")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("err_code") == Some("ERR_DUPLICATE_TITLE")
            && e.level == tracing::Level::INFO
    });
    assert!(found >= 1, "duplicate title should log an INFO end_error event");
}

#[test]
fn test_queries_and_open_are_logged() {
    let capture = init_test_capture();
    let store = BlogStore::open_in_memory().unwrap();

    store.list_posts().unwrap();
    store.view_post("logging-view-unique-3").unwrap();
    store.search_by_tag("logging-tag-unique-3").unwrap();

    capture.assert_event_exists("open_store", EVENT_END);
    capture.assert_event_exists("init_schema", EVENT_END);
    capture.assert_event_exists("list_posts", EVENT_END);

    let view_end = capture
        .events_for_op("view_post")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .count();
    assert!(view_end >= 1);

    let tagged = capture.count_events(|e| {
        e.op.as_deref() == Some("search_by_tag")
            && e.field("tag") == Some("logging-tag-unique-3")
    });
    assert_eq!(tagged, 1, "search start carries the normalized tag");
}

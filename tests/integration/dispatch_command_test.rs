//! Tooling dispatch tests: externally authored payloads injected through
//! the command surface land in the store and the history; malformed
//! payloads are rejected at the boundary without touching either.

use super::instrumented_store;
use serde_json::json;
use store_devtools::commands::{dispatch_payload, DispatchCommandError};
use store_devtools::models::Action;
use store_devtools::recorder::CollapseRegistry;
use store_devtools::store::Dispatcher;

#[test]
fn test_authored_payload_is_recorded_like_any_dispatch() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::new());

    let outcome = dispatch_payload(&mut store, r#"{"kind": "score", "payload": 25}"#)
        .expect("valid payload");
    assert_eq!(outcome.kind.as_str(), "score");

    assert_eq!(store.state().score, 25);
    let recorder = recorder.lock().expect("recorder lock");
    assert_eq!(recorder.len(), 1);
    assert_eq!(recorder.step_at(0).expect("step").kind.as_str(), "score");
}

#[test]
fn test_malformed_payload_leaves_history_untouched() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::new());
    store.dispatch(Action::data("score", json!(1)));

    let err = dispatch_payload(&mut store, "not even json").expect_err("rejected");
    assert!(matches!(err, DispatchCommandError::InvalidPayload(_)));

    let err = dispatch_payload(&mut store, r#"{"payload": 9}"#).expect_err("rejected");
    assert!(matches!(err, DispatchCommandError::MissingKind));

    assert_eq!(store.state().score, 1);
    assert_eq!(recorder.lock().expect("recorder lock").len(), 1);
}

#[test]
fn test_authored_payload_participates_in_collapsing() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::with_kinds(["tick"]));

    store.dispatch(Action::data("tick", json!(null)));
    dispatch_payload(&mut store, r#"{"kind": "tick"}"#).expect("valid payload");

    let recorder = recorder.lock().expect("recorder lock");
    assert_eq!(recorder.len(), 1);
    assert_eq!(recorder.step_at(0).expect("group").collapsed_count, 2);
}

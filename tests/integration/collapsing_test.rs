//! Full-pipeline collapsing tests: high-frequency actions dispatched
//! through the store fold into groups, and the folded history renders and
//! diffs correctly.

use super::{instrumented_store, state_value, NotificationCounter};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use store_devtools::inspector::{format_history_list, format_step_details};
use store_devtools::models::Action;
use store_devtools::recorder::CollapseRegistry;
use store_devtools::store::Dispatcher;

#[test]
fn test_per_frame_actions_fold_into_one_entry() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::with_kinds(["tick"]));
    let counter = NotificationCounter::default();
    let added = Arc::clone(&counter.added);
    recorder
        .lock()
        .expect("recorder lock")
        .add_observer(Box::new(counter));

    store.dispatch(Action::data("score", json!(1)));
    for _ in 0..60 {
        store.dispatch(Action::data("tick", json!(null)));
    }
    store.dispatch(Action::data("score", json!(2)));

    let recorder = recorder.lock().expect("recorder lock");
    assert_eq!(recorder.len(), 3);

    let group = recorder.step_at(1).expect("group");
    assert_eq!(group.collapsed_count, 60);
    assert_eq!(group.members().map(|m| m.len()), Some(60));
    // The group's representative state is the latest member's.
    assert_eq!(group.state.frame, 60);

    // Two genuine appends around the run, one for its first tick.
    assert_eq!(added.load(Ordering::SeqCst), 3);
}

#[test]
fn test_members_keep_their_individual_states() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::with_kinds(["tick"]));

    for _ in 0..3 {
        store.dispatch(Action::data("tick", json!(null)));
    }

    let recorder = recorder.lock().expect("recorder lock");
    let members = recorder.step_at(0).expect("group").members().expect("members");
    let frames: Vec<u64> = members.iter().map(|m| m.state.frame).collect();
    assert_eq!(frames, vec![1, 2, 3]);
}

#[test]
fn test_interleaved_kinds_do_not_fold() {
    let (mut store, recorder) =
        instrumented_store(CollapseRegistry::with_kinds(["tick", "score"]));

    store.dispatch(Action::data("tick", json!(null)));
    store.dispatch(Action::data("score", json!(1)));
    store.dispatch(Action::data("tick", json!(null)));

    let recorder = recorder.lock().expect("recorder lock");
    assert_eq!(recorder.len(), 3);
    assert!(recorder.steps().iter().all(|s| s.collapsed_count == 0));
}

#[test]
fn test_group_renders_in_list_and_detail_views() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::with_kinds(["tick"]));

    store.dispatch(Action::data("tick", json!(null)));
    store.dispatch(Action::data("tick", json!(null)));

    let recorder = recorder.lock().expect("recorder lock");
    let lines = format_history_list(recorder.steps());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("tick x2"));

    let details = format_step_details(recorder.step_at(0).expect("group"), None);
    assert!(details.contains("Collapsed actions: 2"));
    assert!(details.contains("1. tick"));
}

#[test]
fn test_diff_between_consecutive_steps() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::new());

    store.dispatch(Action::data("score", json!(10)));
    store.dispatch(Action::data("score", json!(7)));

    let recorder = recorder.lock().expect("recorder lock");
    let previous = state_value(recorder.step_at(0).expect("first"));
    let second = recorder.step_at(1).expect("second");

    let diff = second.diff_json(&previous);
    let diff = diff.as_ref().as_ref().expect("states differ");
    assert_eq!(diff["score"]["changed"]["from"], json!(10));
    assert_eq!(diff["score"]["changed"]["to"], json!(17));
    assert!(diff.get("frame").is_none());

    // Memoized: the second request returns the identical cached allocation.
    let again = second.diff_json(&previous);
    assert!(Arc::ptr_eq(&second.diff_json(&previous), &again));
}

#[test]
fn test_group_growth_refreshes_serialized_state() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::with_kinds(["tick"]));

    store.dispatch(Action::data("tick", json!(null)));
    store.dispatch(Action::data("tick", json!(null)));
    {
        let recorder = recorder.lock().expect("recorder lock");
        let group = recorder.step_at(0).expect("group");
        assert_eq!(group.state_json()["frame"], json!(2));
    }

    // Growing the group advances the representative state; the memoized
    // form is recomputed, not served stale.
    store.dispatch(Action::data("tick", json!(null)));
    let recorder = recorder.lock().expect("recorder lock");
    let group = recorder.step_at(0).expect("group");
    assert_eq!(group.state_json()["frame"], json!(3));
}

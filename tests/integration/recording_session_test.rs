//! End-to-end recording session tests: a store dispatching a mix of data
//! actions and thunks, with the recorder and observers attached.

use super::{instrumented_store, GameState, NotificationCounter};
use proptest::prelude::*;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use store_devtools::models::Action;
use store_devtools::recorder::CollapseRegistry;
use store_devtools::store::{DispatchResult, Dispatcher};

#[test]
fn test_session_records_dispatches_in_order() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::new());

    store.dispatch(Action::data("score", json!(10)));
    store.dispatch(Action::data("tick", json!(null)));
    store.dispatch(Action::data("score", json!(5)));

    let recorder = recorder.lock().expect("recorder lock");
    let kinds: Vec<&str> = recorder.steps().iter().map(|s| s.kind.as_str()).collect();
    assert_eq!(kinds, vec!["score", "tick", "score"]);

    // Each step holds the state produced by its action.
    assert_eq!(recorder.step_at(0).expect("step").state.score, 10);
    assert_eq!(recorder.step_at(2).expect("step").state.score, 15);
    assert_eq!(recorder.step_at(2).expect("step").state.frame, 1);
}

#[test]
fn test_dispatch_result_is_transparent_with_recording_attached() {
    let (mut store, _recorder) = instrumented_store(CollapseRegistry::new());
    assert_eq!(
        store.dispatch(Action::data("score", json!(1))),
        DispatchResult::Reduced
    );
    assert_eq!(
        store.dispatch(Action::thunk(|_| {})),
        DispatchResult::ThunkRun
    );
}

#[test]
fn test_thunk_records_only_its_nested_dispatches() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::new());

    store.dispatch(Action::thunk(|dispatcher| {
        dispatcher.dispatch(Action::data("score", json!(3)));
        dispatcher.dispatch(Action::data("tick", json!(null)));
    }));

    let recorder = recorder.lock().expect("recorder lock");
    let kinds: Vec<&str> = recorder.steps().iter().map(|s| s.kind.as_str()).collect();
    assert_eq!(kinds, vec!["score", "tick"]);
    assert_eq!(*store.state(), recorder.step_at(1).expect("step").state.as_ref().clone());
}

#[test]
fn test_clear_then_record_starts_fresh() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::with_kinds(["tick"]));
    let counter = NotificationCounter::default();
    let added = Arc::clone(&counter.added);
    let cleared = Arc::clone(&counter.cleared);
    recorder
        .lock()
        .expect("recorder lock")
        .add_observer(Box::new(counter));

    store.dispatch(Action::data("tick", json!(null)));
    store.dispatch(Action::data("tick", json!(null)));
    recorder.lock().expect("recorder lock").clear();
    store.dispatch(Action::data("tick", json!(null)));

    let recorder = recorder.lock().expect("recorder lock");
    assert_eq!(recorder.len(), 1);
    assert_eq!(recorder.step_at(0).expect("step").collapsed_count, 0);
    assert_eq!(cleared.load(Ordering::SeqCst), 1);
    // One notification before the clear, one after; collapsing fired none.
    assert_eq!(added.load(Ordering::SeqCst), 2);
}

#[test]
fn test_history_survives_recording_pause() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::new());

    store.dispatch(Action::data("score", json!(1)));
    recorder.lock().expect("recorder lock").set_recording(false);
    store.dispatch(Action::data("score", json!(2)));
    store.dispatch(Action::data("tick", json!(null)));

    let recorder = recorder.lock().expect("recorder lock");
    // The paused dispatches still reached the store, just not the history.
    assert_eq!(store.state().score, 3);
    assert_eq!(recorder.len(), 1);
}

proptest! {
    /// For any sequence of recordable actions with no collapsible kinds,
    /// the history equals the dispatch order, one step per action.
    #[test]
    fn test_append_order_property(kinds in prop::collection::vec("[a-z]{1,8}", 1..40)) {
        let (mut store, recorder) = instrumented_store(CollapseRegistry::new());
        for kind in &kinds {
            store.dispatch(Action::data(kind.as_str(), json!(null)));
        }

        let recorder = recorder.lock().expect("recorder lock");
        let recorded: Vec<String> = recorder
            .steps()
            .iter()
            .map(|s| s.kind.as_str().to_string())
            .collect();
        prop_assert_eq!(recorded, kinds);
        prop_assert!(recorder.steps().iter().all(|s| s.collapsed_count == 0));
    }
}

#[test]
fn test_recorded_state_is_shared_not_cloned() {
    let (mut store, recorder) = instrumented_store(CollapseRegistry::new());
    store.dispatch(Action::data("score", json!(1)));

    let recorder = recorder.lock().expect("recorder lock");
    let step_state: &Arc<GameState> = &recorder.step_at(0).expect("step").state;
    // The step holds the same allocation the store produced, not a copy.
    assert!(Arc::ptr_eq(step_state, &store.state()));
}

//! DevTools recorder for Redux-style stores.
//!
//! This crate records a running application's dispatched actions and the
//! states they produce, and exposes the recorded history for time-travel
//! style inspection (action view, state view, structured diffs, stack
//! traces) from an editor or tooling host. It also lets tooling inject
//! hand-authored actions back into the store for replay.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **models**: Core data structures for actions and recorded history steps
//! - **store**: The minimal store abstraction being instrumented, with the
//!   interceptor seam the recorder plugs into
//! - **recorder**: The history recorder, its collapsing policy, and the
//!   recording interceptor
//! - **serialize**: Per-step memoized JSON forms and structured state diffs
//! - **inspector**: Text formatting of steps for list, detail, and diff views
//! - **commands**: The dispatch-from-tooling surface for action injection
//! - **config**: Recorder settings loaded from host configuration
//!
//! # Recording pipeline
//!
//! Application code dispatches an action; the store applies it, then the
//! recording interceptor hands `(action, resulting state)` to the history
//! recorder. The recorder filters executable (thunk) actions, applies the
//! collapsing policy for high-frequency action kinds, appends or folds the
//! step, and notifies registered observers. Everything runs synchronously
//! on the dispatching thread; recording can never fail the dispatch.
//!
//! # Usage
//!
//! ```
//! use serde_json::json;
//! use store_devtools::models::Action;
//! use store_devtools::recorder::{attach, CollapseRegistry, HistoryRecorder};
//! use store_devtools::store::{Dispatcher, Store};
//!
//! // A store with a reducer over a serializable state.
//! let mut store = Store::new(json!({ "count": 0 }), |state, action| {
//!     match action.kind.as_str() {
//!         "increment" => json!({ "count": state["count"].as_i64().unwrap_or(0) + 1 }),
//!         _ => state.clone(),
//!     }
//! });
//!
//! // Record every dispatch, folding consecutive "tick" actions together.
//! let recorder = HistoryRecorder::new(CollapseRegistry::with_kinds(["tick"])).into_shared();
//! attach(&mut store, &recorder);
//!
//! store.dispatch(Action::data("increment", json!(null)));
//! store.dispatch(Action::data("increment", json!(null)));
//!
//! let recorder = recorder.lock().unwrap();
//! assert_eq!(recorder.len(), 2);
//! assert_eq!(*recorder.step_at(1).unwrap().state, json!({ "count": 2 }));
//! ```

pub mod commands;
pub mod config;
pub mod inspector;
pub mod models;
pub mod recorder;
pub mod serialize;
pub mod store;

pub use commands::{dispatch_payload, DispatchCommandError, DispatchOutcome};
pub use config::{get_config, load_config, DevtoolsConfig};
pub use models::{Action, ActionKind, DataAction, Step, StepAction, Thunk};
pub use recorder::{
    attach, CollapseRegistry, HistoryObserver, HistoryRecorder, RecordingInterceptor,
    SharedRecorder,
};
pub use store::{DispatchResult, Dispatcher, Interceptor, Store};

//! Dispatch history recording.
//!
//! This module owns the recording side of the devtools: the
//! [`HistoryRecorder`] maintaining the ordered step log and its collapsing
//! policy, the [`RecordingInterceptor`] that bridges a store's dispatch
//! pipeline to the recorder, the [`CollapseRegistry`] declaring which action
//! kinds may be folded together, and the observer/clock/trace collaborators.
//!
//! Recording is synchronous and inline with dispatch: no queue, no
//! background processing. Notification callbacks run on the same call stack
//! as the dispatch that triggered them; a callback that dispatches further
//! actions does so re-entrantly, which is a documented hazard rather than
//! something the recorder prevents.

pub mod clock;
pub mod collapse;
pub mod history;
pub mod interceptor;
pub mod observers;
pub mod trace;

pub use clock::{Clock, SystemClock};
pub use collapse::CollapseRegistry;
pub use history::{HistoryRecorder, SharedRecorder};
pub use interceptor::RecordingInterceptor;
pub use observers::HistoryObserver;
pub use trace::{BacktraceProvider, TraceProvider};

use crate::store::Store;

/// Wires a recording interceptor for `recorder` into `store`'s dispatch
/// pipeline.
pub fn attach<S: 'static>(store: &mut Store<S>, recorder: &SharedRecorder<S>) {
    store.add_interceptor(Box::new(RecordingInterceptor::new(recorder.clone())));
}

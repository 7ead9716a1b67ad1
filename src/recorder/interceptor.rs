//! The recording interceptor: the middleware stage bridging a store's
//! dispatch pipeline to the history recorder.
//!
//! The interceptor observes every applied action after the base dispatch
//! has run, so the state it records is the state the action produced. It is
//! observationally transparent: it never alters the action, the dispatch
//! result, or the order of effects, and a recording problem can only reach
//! the log, never the dispatch caller. When recording is disabled the
//! interceptor is a cheap per-call no-op.

use crate::models::Action;
use crate::recorder::history::SharedRecorder;
use crate::store::Interceptor;
use std::sync::Arc;

/// Dispatch-pipeline stage that records `(action, resulting state)` pairs.
pub struct RecordingInterceptor<S> {
    recorder: SharedRecorder<S>,
}

impl<S> RecordingInterceptor<S> {
    /// Creates an interceptor feeding the given recorder.
    pub fn new(recorder: SharedRecorder<S>) -> Self {
        Self { recorder }
    }
}

impl<S> Interceptor<S> for RecordingInterceptor<S> {
    fn after_dispatch(&mut self, action: &Action, state: &Arc<S>) {
        // Executable actions are filtered by shape before recording is
        // attempted; the recorder guards again for direct callers.
        if action.is_thunk() {
            return;
        }

        match self.recorder.lock() {
            Ok(mut recorder) => {
                if recorder.is_recording() {
                    recorder.record_step(action, Arc::clone(state));
                }
            }
            Err(e) => {
                log::warn!("history recorder unavailable; dropping step: {}", e);
            }
        }
    }
}

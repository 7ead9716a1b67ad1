//! The history recorder and its collapsing state machine.
//!
//! Maintains the ordered log of dispatch steps. The log is append-only with
//! one exception: when consecutive actions of the same collapsible kind
//! arrive, the most recent entry is replaced (or grown in place) to
//! aggregate them into a collapsed group. Earlier entries are immutable once
//! superseded.

use crate::config::{get_config, DevtoolsConfig};
use crate::models::{Action, Step};
use crate::recorder::clock::{Clock, SystemClock};
use crate::recorder::collapse::CollapseRegistry;
use crate::recorder::observers::HistoryObserver;
use crate::recorder::trace::{BacktraceProvider, TraceProvider};
use std::sync::{Arc, Mutex};

/// Shared handle to a recorder, for interceptors and inspection surfaces.
///
/// The recording model is single-threaded and synchronous; the mutex exists
/// because the collapsing decision is a read-then-conditionally-replace of
/// the last entry, which must be exclusive if a host ever touches the
/// recorder from more than one thread.
pub type SharedRecorder<S> = Arc<Mutex<HistoryRecorder<S>>>;

/// Owner of the ordered dispatch history.
pub struct HistoryRecorder<S> {
    steps: Vec<Step<S>>,
    recording: bool,
    capture_stack_traces: bool,
    max_entries: usize,
    registry: CollapseRegistry,
    observers: Vec<Box<dyn HistoryObserver<S>>>,
    clock: Box<dyn Clock>,
    trace: Box<dyn TraceProvider>,
}

impl<S> HistoryRecorder<S> {
    /// Creates a recorder using the global devtools configuration.
    pub fn new(registry: CollapseRegistry) -> Self {
        Self::with_config(registry, &get_config())
    }

    /// Creates a recorder from an explicit configuration snapshot.
    pub fn with_config(registry: CollapseRegistry, config: &DevtoolsConfig) -> Self {
        Self {
            steps: Vec::new(),
            recording: config.recording_enabled,
            capture_stack_traces: config.capture_stack_traces,
            max_entries: config.max_history_entries,
            registry,
            observers: Vec::new(),
            clock: Box::new(SystemClock),
            trace: Box::new(BacktraceProvider),
        }
    }

    /// Replaces the timestamp source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the stack trace provider.
    pub fn with_trace_provider(mut self, trace: impl TraceProvider + 'static) -> Self {
        self.trace = Box::new(trace);
        self
    }

    /// Wraps the recorder in the shared handle used by interceptors.
    pub fn into_shared(self) -> SharedRecorder<S> {
        Arc::new(Mutex::new(self))
    }

    /// Registers an observer of history changes. Observers are notified in
    /// registration order.
    pub fn add_observer(&mut self, observer: Box<dyn HistoryObserver<S>>) {
        self.observers.push(observer);
    }

    /// Marks an action kind as collapsible from now on.
    pub fn register_collapsible(&mut self, kind: impl Into<crate::models::ActionKind>) {
        self.registry.register(kind);
    }

    /// Whether dispatches are currently being recorded.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Enables or disables recording. Disabling keeps the existing history
    /// for inspection.
    pub fn set_recording(&mut self, recording: bool) {
        self.recording = recording;
    }

    /// The recorded steps, in dispatch order.
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    /// Number of history entries (a collapsed group counts as one).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step at `index`, or `None` when the index is out of
    /// bounds (e.g. a stale selection after a clear). Never panics.
    pub fn step_at(&self, index: usize) -> Option<&Step<S>> {
        self.steps.get(index)
    }

    /// Records a dispatched action and the state that resulted from it.
    ///
    /// Thunk actions are silently ignored; recording has no external failure
    /// mode and never surfaces an error to the dispatch caller.
    ///
    /// When the previous entry holds the same action kind and that kind is
    /// registered collapsible, the new action is folded into the previous
    /// entry instead of appending, and no "step added" notification fires.
    pub fn record_step(&mut self, action: &Action, state: Arc<S>) {
        let data = match action {
            Action::Data(data) => data,
            Action::Thunk(_) => {
                log::debug!("ignoring executable action; only data actions are recorded");
                return;
            }
        };

        let kind = data.kind.clone();
        let timestamp = self.clock.now();
        let stack_trace = if self.capture_stack_traces {
            self.trace.capture()
        } else {
            String::new()
        };
        let candidate = Step::single(data.clone(), state, timestamp, stack_trace);

        let collapse_into_last = self.registry.is_collapsible(&kind)
            && self.steps.last().map_or(false, |last| last.kind == kind);

        if collapse_into_last {
            let last_index = self.steps.len() - 1;
            if self.steps[last_index].collapsed_count == 0 {
                // Promote: replace the last entry by index with a fresh
                // two-member group step.
                let prev = self.steps.remove(last_index);
                self.steps.push(Step::promote(prev, candidate));
            } else {
                self.steps[last_index].absorb(candidate);
            }
            // Neither collapsing branch creates a history entry, so neither
            // notifies.
            return;
        }

        self.steps.push(candidate);
        if self.steps.len() > self.max_entries {
            self.steps.remove(0);
        }

        if let Some(step) = self.steps.last() {
            for observer in self.observers.iter_mut() {
                observer.on_step_added(step);
            }
        }
    }

    /// Empties the history and notifies observers exactly once.
    ///
    /// A subsequent [`record_step`](Self::record_step) starts fresh: there
    /// is no residual collapsing state.
    pub fn clear(&mut self) {
        self.steps.clear();
        for observer in self.observers.iter_mut() {
            observer.on_history_cleared();
        }
    }
}

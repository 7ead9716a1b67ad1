//! The store collaborator the recorder instruments.
//!
//! This module provides the minimal Redux-style store abstraction the
//! devtools attach to: a reducer applied to shared state snapshots, a
//! [`Dispatcher`] entry point, and the middleware-composition seam
//! ([`Interceptor`]) through which the recording interceptor observes
//! dispatches.
//!
//! All dispatching is synchronous and single-threaded: interceptors and
//! thunks run inline on the caller's stack. A thunk (or an interceptor that
//! reaches back into the store) dispatching further actions does so
//! re-entrantly; that is supported but can recurse without bound if the
//! callback graph is cyclic.

use crate::models::{Action, DataAction};
use std::sync::Arc;

/// Outcome of a dispatch, reported transparently to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// A data action was applied by the reducer.
    Reduced,

    /// A thunk was invoked; any state changes happened through the
    /// dispatches it issued itself.
    ThunkRun,
}

/// The dispatch entry point of a store.
///
/// Thunks and external tooling receive this trait object rather than the
/// concrete store, so anything that can dispatch is interchangeable.
pub trait Dispatcher {
    /// Submits an action to the processing pipeline.
    fn dispatch(&mut self, action: Action) -> DispatchResult;

    /// Submits an inert data action.
    fn dispatch_data(&mut self, action: DataAction) -> DispatchResult {
        self.dispatch(Action::Data(action))
    }
}

/// A middleware stage observing the dispatch pipeline.
///
/// Interceptors are invoked after the base dispatch has applied the action,
/// with the state read from the store at that point. They cannot alter the
/// action, the order of effects, or the value returned to the dispatch
/// caller: observation is side-effect-only.
pub trait Interceptor<S> {
    /// Called once per applied data action, after the reducer ran.
    fn after_dispatch(&mut self, action: &Action, state: &Arc<S>);
}

/// Reducer function: produces the next state from the current state and a
/// data action.
pub type Reducer<S> = Box<dyn Fn(&S, &DataAction) -> S>;

/// A minimal synchronous store with a middleware-composition point.
pub struct Store<S> {
    state: Arc<S>,
    reducer: Reducer<S>,
    interceptors: Vec<Box<dyn Interceptor<S>>>,
}

impl<S> Store<S> {
    /// Creates a store from an initial state and a reducer.
    pub fn new(initial_state: S, reducer: impl Fn(&S, &DataAction) -> S + 'static) -> Self {
        Self {
            state: Arc::new(initial_state),
            reducer: Box::new(reducer),
            interceptors: Vec::new(),
        }
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&self.state)
    }

    /// Inserts an interceptor into the dispatch pipeline.
    ///
    /// Interceptors are invoked in registration order.
    pub fn add_interceptor(&mut self, interceptor: Box<dyn Interceptor<S>>) {
        self.interceptors.push(interceptor);
    }
}

impl<S> Dispatcher for Store<S> {
    fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Thunk(thunk) => {
                // Executable actions are invoked, not observed: only the data
                // dispatches they issue reach the interceptors.
                thunk.invoke(self);
                DispatchResult::ThunkRun
            }
            Action::Data(data) => {
                let next = (self.reducer)(&self.state, &data);
                self.state = Arc::new(next);

                let observed = Action::Data(data);
                let state = Arc::clone(&self.state);
                for interceptor in self.interceptors.iter_mut() {
                    interceptor.after_dispatch(&observed, &state);
                }
                DispatchResult::Reduced
            }
        }
    }
}

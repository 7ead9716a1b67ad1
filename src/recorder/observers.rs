//! History change notifications.

use crate::models::Step;

/// Observer of history changes, registered with the recorder.
///
/// Delivery is synchronous and fire-and-forget, on the same call stack as
/// the dispatch that triggered the change, in registration order. Observers
/// must tolerate being the only subscriber or one of many. An observer that
/// dispatches further actions from a callback re-enters the pipeline
/// synchronously; the recorder does not guard against the resulting
/// recursion.
pub trait HistoryObserver<S> {
    /// A genuinely new, non-collapsed step was appended to the history.
    ///
    /// Collapsing transformations (promoting a step into a group, growing an
    /// existing group) do not fire this.
    fn on_step_added(&mut self, step: &Step<S>);

    /// The history was emptied.
    fn on_history_cleared(&mut self);
}

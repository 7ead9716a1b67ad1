//! Action types flowing through the dispatch pipeline.
//!
//! An action is either inert data describing an intended state transition
//! (`Action::Data`) or an executable thunk that issues further dispatches
//! itself (`Action::Thunk`). Only data actions are ever recorded; thunks are
//! invoked by the store and filtered out of the history.

use crate::store::Dispatcher;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Stable identifier of an action's variant/type.
///
/// Captured at record time because the action value itself may not survive
/// serialization round-trips; used for collapsing comparisons and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionKind(String);

impl ActionKind {
    /// Creates a new action kind from any string-like value.
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    /// Returns the kind as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionKind {
    fn from(kind: &str) -> Self {
        Self(kind.to_string())
    }
}

impl From<String> for ActionKind {
    fn from(kind: String) -> Self {
        Self(kind)
    }
}

/// An inert, recordable action: a kind tag plus a JSON-shaped payload.
///
/// This is the only action shape that reaches the history recorder. The
/// recorder treats the payload as opaque beyond its serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAction {
    /// Variant identifier of this action.
    pub kind: ActionKind,

    /// Structured payload carried by the action. `Value::Null` when the
    /// action carries no data.
    pub payload: Value,
}

impl DataAction {
    /// Creates a new data action.
    pub fn new(kind: impl Into<ActionKind>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

/// An executable action: a closure the dispatch pipeline invokes rather than
/// passing through as data.
///
/// The closure receives the store's dispatch entry point and may issue
/// further dispatches synchronously. Thunks are never recorded.
pub struct Thunk {
    run: Box<dyn FnOnce(&mut dyn Dispatcher)>,
}

impl Thunk {
    /// Wraps a closure as a thunk action.
    pub fn new(run: impl FnOnce(&mut dyn Dispatcher) + 'static) -> Self {
        Self { run: Box::new(run) }
    }

    /// Consumes the thunk and runs it against the given dispatcher.
    pub fn invoke(self, dispatcher: &mut dyn Dispatcher) {
        (self.run)(dispatcher);
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

/// A value submitted to the store's dispatch pipeline.
#[derive(Debug)]
pub enum Action {
    /// Inert data describing a state transition. Recordable.
    Data(DataAction),

    /// Executable value that performs dispatches itself. Never recorded.
    Thunk(Thunk),
}

impl Action {
    /// Convenience constructor for a data action.
    pub fn data(kind: impl Into<ActionKind>, payload: Value) -> Self {
        Action::Data(DataAction::new(kind, payload))
    }

    /// Convenience constructor for a thunk action.
    pub fn thunk(run: impl FnOnce(&mut dyn Dispatcher) + 'static) -> Self {
        Action::Thunk(Thunk::new(run))
    }

    /// Returns `true` if this action is an executable thunk.
    ///
    /// This is the filtering predicate applied before any recording is
    /// attempted: data-shaped actions are recordable, executable values are
    /// not.
    pub fn is_thunk(&self) -> bool {
        matches!(self, Action::Thunk(_))
    }

    /// Returns the kind of a data action, or `None` for a thunk.
    pub fn kind(&self) -> Option<&ActionKind> {
        match self {
            Action::Data(data) => Some(&data.kind),
            Action::Thunk(_) => None,
        }
    }
}

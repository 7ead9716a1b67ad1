//! Dispatch-from-tooling command surface.
//!
//! Lets a developer inject an externally authored action (e.g. hand-edited
//! JSON in an inspector pane) into the store for replay or experimentation.
//! This is the one deliberate, user-initiated path that is allowed to
//! surface an error: a malformed payload is caught at this boundary,
//! reported, and leaves the store and history untouched.

use crate::models::{ActionKind, DataAction};
use crate::store::{DispatchResult, Dispatcher};
use serde_json::Value;
use std::fmt;

/// Error types for the dispatch-from-tooling command.
#[derive(Debug)]
pub enum DispatchCommandError {
    /// The payload text could not be parsed as JSON.
    InvalidPayload(String),

    /// The payload parsed but carries no "kind" string, so no action can be
    /// built from it.
    MissingKind,
}

impl fmt::Display for DispatchCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchCommandError::InvalidPayload(msg) => {
                write!(f, "Invalid action payload: {}", msg)
            }
            DispatchCommandError::MissingKind => {
                write!(f, "Action payload is missing a \"kind\" string")
            }
        }
    }
}

impl std::error::Error for DispatchCommandError {}

/// Result of a successful tooling dispatch.
#[derive(Debug)]
pub struct DispatchOutcome {
    /// Kind of the action that was dispatched.
    pub kind: ActionKind,

    /// How the store processed the action.
    pub result: DispatchResult,

    /// Status message for host notifications.
    pub status_message: String,
}

/// Parses an externally authored JSON payload and forwards it to the
/// store's dispatch entry point.
///
/// The payload format is `{"kind": "...", "payload": ...}`; `payload` is
/// optional and defaults to `null`.
///
/// # Arguments
///
/// * `dispatcher` - The store's dispatch entry point
/// * `json_text` - The authored payload text
///
/// # Errors
///
/// Returns [`DispatchCommandError`] when the text is not valid JSON or has
/// no `"kind"` string. Failures are also reported to the log; nothing is
/// dispatched and prior history is untouched.
pub fn dispatch_payload(
    dispatcher: &mut dyn Dispatcher,
    json_text: &str,
) -> Result<DispatchOutcome, DispatchCommandError> {
    let value: Value = serde_json::from_str(json_text).map_err(|e| {
        log::error!("rejected tooling dispatch, invalid JSON: {}", e);
        DispatchCommandError::InvalidPayload(e.to_string())
    })?;

    let kind = value
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            log::error!("rejected tooling dispatch, payload has no \"kind\" string");
            DispatchCommandError::MissingKind
        })?
        .to_string();
    let payload = value.get("payload").cloned().unwrap_or(Value::Null);

    let action = DataAction::new(kind, payload);
    let kind = action.kind.clone();
    let result = dispatcher.dispatch_data(action);

    Ok(DispatchOutcome {
        status_message: format!("Dispatched action '{}'", kind),
        kind,
        result,
    })
}

//! Recorded history steps.
//!
//! A [`Step`] is one unit of dispatch history: the action that was
//! dispatched, the resulting state snapshot, and capture-time metadata
//! (timestamp, stack trace). Consecutive same-kind actions marked
//! collapsible are folded into a single step whose action is an ordered
//! group of member steps, keeping the history readable under high-frequency
//! dispatch while retaining every individual action for inspection.

use crate::models::action::{ActionKind, DataAction};
use crate::serialize::cache::StepCache;
use crate::serialize::diff::diff_values;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// The action recorded by a step: either a single dispatched action or an
/// ordered group of steps folded together by collapsing.
#[derive(Debug)]
pub enum StepAction<S> {
    /// One dispatched action.
    Single(DataAction),

    /// Member steps of a collapsed group, in dispatch order.
    Collapsed(Vec<Step<S>>),
}

/// One recorded unit of dispatch history.
#[derive(Debug)]
pub struct Step<S> {
    /// Unique identifier for this step.
    ///
    /// Generated using UUID v4 for guaranteed uniqueness.
    pub id: String,

    /// Variant identifier of the recorded action, captured at record time.
    /// Never changes after creation.
    pub kind: ActionKind,

    /// The recorded action, or the member steps of a collapsed group.
    pub action: StepAction<S>,

    /// Number of actions folded into this step. `0` for a step that was
    /// never collapsed; a group of `n` actions carries `n`.
    pub collapsed_count: u32,

    /// The state snapshot after the action was applied. Shared with the
    /// store, never deep-cloned.
    pub state: Arc<S>,

    /// Time of recording, supplied by the recorder's clock.
    pub timestamp: DateTime<Utc>,

    /// Stack trace captured at record time, already trimmed of recording
    /// infrastructure frames. Empty when trace capture is disabled.
    pub stack_trace: String,

    /// Lazily computed, memoized serialized forms of this step.
    pub(crate) cache: StepCache,
}

impl<S> Step<S> {
    /// Creates a step for a single, non-collapsed action.
    pub fn single(
        action: DataAction,
        state: Arc<S>,
        timestamp: DateTime<Utc>,
        stack_trace: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: action.kind.clone(),
            action: StepAction::Single(action),
            collapsed_count: 0,
            state,
            timestamp,
            stack_trace,
            cache: StepCache::default(),
        }
    }

    /// Promotes a single step and a same-kind candidate into a collapsed
    /// group of two.
    ///
    /// The group's representative keeps the first member's stack trace (the
    /// lineage that opened the group) and the candidate's state and
    /// timestamp, so the group always reflects where the application is
    /// after its latest member.
    pub(crate) fn promote(prev: Step<S>, candidate: Step<S>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: candidate.kind.clone(),
            collapsed_count: 2,
            state: Arc::clone(&candidate.state),
            timestamp: candidate.timestamp,
            stack_trace: prev.stack_trace.clone(),
            action: StepAction::Collapsed(vec![prev, candidate]),
            cache: StepCache::default(),
        }
    }

    /// Grows an existing collapsed group by one member, in place.
    ///
    /// Advances the representative state and timestamp to the new member and
    /// invalidates the memoized serialized forms, since they were computed
    /// against the previous representative state.
    pub(crate) fn absorb(&mut self, candidate: Step<S>) {
        match &mut self.action {
            StepAction::Collapsed(members) => {
                self.state = Arc::clone(&candidate.state);
                self.timestamp = candidate.timestamp;
                self.collapsed_count += 1;
                members.push(candidate);
                self.cache.invalidate();
            }
            StepAction::Single(_) => {
                // Callers only absorb into groups; a single step stays as-is.
                log::warn!("attempted to grow a non-collapsed step; ignoring");
            }
        }
    }

    /// Returns `true` if this step is a collapsed group.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed_count > 0
    }

    /// Returns the member steps of a collapsed group, or `None` for a
    /// single-action step.
    pub fn members(&self) -> Option<&[Step<S>]> {
        match &self.action {
            StepAction::Collapsed(members) => Some(members),
            StepAction::Single(_) => None,
        }
    }
}

impl<S: Serialize> Step<S> {
    /// Returns the serialized form of this step's action, computing it at
    /// most once.
    ///
    /// For a collapsed group this is an array of the members' serialized
    /// actions, in dispatch order.
    pub fn action_json(&self) -> Arc<Value> {
        self.cache.action_json_with(|| match &self.action {
            StepAction::Single(action) => serialize_or_null(action),
            StepAction::Collapsed(members) => Value::Array(
                members
                    .iter()
                    .map(|member| (*member.action_json()).clone())
                    .collect(),
            ),
        })
    }

    /// Returns the serialized form of this step's state snapshot, computing
    /// it at most once.
    pub fn state_json(&self) -> Arc<Value> {
        self.cache.state_json_with(|| serialize_or_null(&*self.state))
    }

    /// Returns the structured diff from `previous_state` to this step's
    /// state, computing it at most once.
    ///
    /// `previous_state` is the serialized state of the preceding step in the
    /// history (or `Value::Null` for the first step). `None` inside the
    /// result means the two states are equal.
    pub fn diff_json(&self, previous_state: &Value) -> Arc<Option<Value>> {
        self.cache
            .diff_json_with(|| diff_values(previous_state, &self.state_json()))
    }
}

/// Serializes a value to JSON, falling back to `Value::Null` on failure.
///
/// Recording-path serialization must never surface an error to the caller.
fn serialize_or_null<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        log::warn!("failed to serialize value for inspection: {}", e);
        Value::Null
    })
}

//! Per-step memoization of serialized forms.
//!
//! Each step owns one [`StepCache`] holding its action, state, and diff
//! representations. A form is absent until first requested, computed exactly
//! once, and reference-stable across repeated requests. Nothing clears a
//! cache automatically; only [`StepCache::invalidate`] discards the
//! memoized values.

use once_cell::sync::OnceCell;
use serde_json::Value;
use std::sync::Arc;

/// Lazily computed, memoized serialized forms of a step.
#[derive(Debug, Default)]
pub struct StepCache {
    action_json: OnceCell<Arc<Value>>,
    state_json: OnceCell<Arc<Value>>,
    diff_json: OnceCell<Arc<Option<Value>>>,
}

impl StepCache {
    /// Returns the memoized action representation, computing it with
    /// `compute` on first request only.
    pub fn action_json_with(&self, compute: impl FnOnce() -> Value) -> Arc<Value> {
        Arc::clone(self.action_json.get_or_init(|| Arc::new(compute())))
    }

    /// Returns the memoized state representation, computing it with
    /// `compute` on first request only.
    pub fn state_json_with(&self, compute: impl FnOnce() -> Value) -> Arc<Value> {
        Arc::clone(self.state_json.get_or_init(|| Arc::new(compute())))
    }

    /// Returns the memoized state diff, computing it with `compute` on
    /// first request only. `None` inside the result means "no difference".
    pub fn diff_json_with(&self, compute: impl FnOnce() -> Option<Value>) -> Arc<Option<Value>> {
        Arc::clone(self.diff_json.get_or_init(|| Arc::new(compute())))
    }

    /// Discards all memoized values so the next request recomputes them.
    ///
    /// Used when the value a form was computed from has advanced, e.g. when
    /// a collapsed group's representative state moves to a newer member.
    pub fn invalidate(&mut self) {
        *self = StepCache::default();
    }
}

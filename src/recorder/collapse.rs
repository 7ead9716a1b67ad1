//! Collapsible action-kind registry.
//!
//! Collapsing eligibility is a statically declared capability: action kinds
//! are registered up front and the recorder queries a plain boolean check at
//! record time. There is no reflective or attribute-based lookup.

use crate::models::ActionKind;
use std::collections::HashSet;

/// The set of action kinds eligible for collapsing.
///
/// Kinds dispatched at high frequency (per-frame input, continuous drag
/// updates) are registered here so consecutive runs of them fold into a
/// single history entry.
#[derive(Debug, Clone, Default)]
pub struct CollapseRegistry {
    kinds: HashSet<ActionKind>,
}

impl CollapseRegistry {
    /// Creates an empty registry: no kind collapses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from a list of collapsible kinds.
    pub fn with_kinds<K: Into<ActionKind>>(kinds: impl IntoIterator<Item = K>) -> Self {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }

    /// Marks an action kind as collapsible.
    pub fn register(&mut self, kind: impl Into<ActionKind>) {
        self.kinds.insert(kind.into());
    }

    /// Returns `true` if consecutive actions of `kind` may be folded
    /// together.
    pub fn is_collapsible(&self, kind: &ActionKind) -> bool {
        self.kinds.contains(kind)
    }

    /// Number of registered collapsible kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if no kind is registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

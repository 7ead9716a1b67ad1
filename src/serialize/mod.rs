//! Serialization support for inspection: per-step memoization and
//! structured JSON diffs.
//!
//! Serialized forms are a pure memoization layer over a step, never part of
//! its identity: each form is computed at most once per step and only an
//! explicit invalidation (performed by the recorder when it grows a
//! collapsed group) ever discards one.

pub mod cache;
pub mod diff;

pub use cache::StepCache;
pub use diff::diff_values;

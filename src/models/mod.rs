//! Data models for dispatched actions and recorded history steps.
//!
//! This module contains the core data structures used throughout the
//! devtools recorder: the actions that flow through a store's dispatch
//! pipeline and the history steps built from them.

pub mod action;
pub mod step;

pub use action::{Action, ActionKind, DataAction, Thunk};
pub use step::{Step, StepAction};

//! Configuration schema for the devtools recorder.
//!
//! This module defines the configuration structure and validation logic for
//! all user-configurable recorder settings.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the devtools recorder.
///
/// All settings can be configured via host settings under the
/// "store-devtools" key. Missing or invalid settings fall back to sensible
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevtoolsConfig {
    /// Whether dispatched actions are recorded into the history.
    ///
    /// When disabled, the recording interceptor becomes a no-op passthrough
    /// and dispatch proceeds with no instrumentation overhead beyond one
    /// branch. Defaults to true.
    #[serde(default = "default_recording_enabled")]
    pub recording_enabled: bool,

    /// Whether to capture a stack trace for each recorded step.
    ///
    /// Trace capture is the most expensive part of recording; disable it
    /// when recording high-frequency dispatch in large sessions. Defaults
    /// to true.
    #[serde(default = "default_capture_stack_traces")]
    pub capture_stack_traces: bool,

    /// Maximum number of entries to keep in the history.
    ///
    /// Older entries beyond this limit are automatically removed. A
    /// collapsed group counts as one entry. Defaults to 1000.
    ///
    /// Must be > 0.
    #[serde(default = "default_max_history_entries")]
    pub max_history_entries: usize,
}

impl Default for DevtoolsConfig {
    fn default() -> Self {
        Self {
            recording_enabled: default_recording_enabled(),
            capture_stack_traces: default_capture_stack_traces(),
            max_history_entries: default_max_history_entries(),
        }
    }
}

impl DevtoolsConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive
    /// error message.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_history_entries == 0 {
            return Err("maxHistoryEntries must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Merges user settings over this configuration; user settings take
    /// precedence. Fields the user omitted were already filled with
    /// defaults during deserialization.
    pub fn merge(&self, user: &DevtoolsConfig) -> DevtoolsConfig {
        user.clone()
    }
}

fn default_recording_enabled() -> bool {
    true
}

fn default_capture_stack_traces() -> bool {
    true
}

fn default_max_history_entries() -> usize {
    1000
}

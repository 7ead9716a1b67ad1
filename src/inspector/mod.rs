//! Text formatting for history inspection.
//!
//! This module provides functions for formatting recorded steps into
//! human-readable strings suitable for display in list views, detail panes,
//! and diff views. Rendering goes through each step's serialization cache,
//! so repeated formatting never re-serializes an action or state.

use crate::models::{Step, StepAction};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Formats a list of steps for display in a history list view.
///
/// Each step is formatted as one line; see [`format_step_entry`].
pub fn format_history_list<S>(steps: &[Step<S>]) -> Vec<String> {
    steps.iter().map(format_step_entry).collect()
}

/// Formats a single step for list display.
///
/// Format: `KIND (timestamp)` for a single step, `KIND xN (timestamp)` for
/// a collapsed group of N actions.
pub fn format_step_entry<S>(step: &Step<S>) -> String {
    let timestamp = format_timestamp(&step.timestamp);
    if step.is_collapsed() {
        format!("{} x{} ({})", step.kind, step.collapsed_count, timestamp)
    } else {
        format!("{} ({})", step.kind, timestamp)
    }
}

/// Formats a step with detailed information for an expanded view.
///
/// Includes the action and state JSON, the diff against the previous step's
/// state when one is supplied, the captured stack trace, and a member
/// listing for collapsed groups.
pub fn format_step_details<S: Serialize>(step: &Step<S>, previous_state: Option<&Value>) -> String {
    let mut output = String::new();

    output.push_str("═══════════════════════════════════════════════════════════\n");
    output.push_str(&format!("Step ID: {}\n", step.id));
    output.push_str(&format!("Action kind: {}\n", step.kind));
    output.push_str(&format!(
        "Timestamp: {}\n",
        format_timestamp_detailed(&step.timestamp)
    ));
    if step.is_collapsed() {
        output.push_str(&format!("Collapsed actions: {}\n", step.collapsed_count));
    }
    output.push_str("═══════════════════════════════════════════════════════════\n\n");

    output.push_str("ACTION\n");
    output.push_str("───────────────────────────────────────────────────────────\n");
    output.push_str(&pretty(&step.action_json()));
    output.push('\n');

    if let StepAction::Collapsed(members) = &step.action {
        output.push_str("\nMembers:\n");
        for (index, member) in members.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} ({})\n",
                index + 1,
                member.kind,
                format_timestamp(&member.timestamp)
            ));
        }
    }

    output.push_str("\nSTATE\n");
    output.push_str("───────────────────────────────────────────────────────────\n");
    output.push_str(&pretty(&step.state_json()));
    output.push('\n');

    if let Some(previous) = previous_state {
        output.push_str("\nDIFF\n");
        output.push_str("───────────────────────────────────────────────────────────\n");
        match step.diff_json(previous).as_ref() {
            Some(diff) => output.push_str(&format_diff(diff)),
            None => output.push_str("(no change)\n"),
        }
    }

    if !step.stack_trace.is_empty() {
        output.push_str("\nSTACK TRACE\n");
        output.push_str("───────────────────────────────────────────────────────────\n");
        output.push_str(&step.stack_trace);
        output.push('\n');
    }

    output
}

/// Renders a structured diff tree as indented `path: change` lines.
pub fn format_diff(diff: &Value) -> String {
    let mut lines = Vec::new();
    render_diff(diff, "", &mut lines);
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn render_diff(node: &Value, path: &str, lines: &mut Vec<String>) {
    if let Value::Object(map) = node {
        if let Some(changed) = map.get("changed") {
            lines.push(format!(
                "{}: {} -> {}",
                path, changed["from"], changed["to"]
            ));
            return;
        }
        if let Some(added) = map.get("added") {
            lines.push(format!("{}: + {}", path, added));
            return;
        }
        if let Some(removed) = map.get("removed") {
            lines.push(format!("{}: - {}", path, removed));
            return;
        }
        for (key, child) in map {
            let child_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", path, key)
            };
            render_diff(child, &child_path, lines);
        }
    } else {
        lines.push(format!("{}: {}", path, node));
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Formats a timestamp for compact list display.
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats a timestamp with sub-second precision for detail views.
fn format_timestamp_detailed(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string()
}

//! Stack trace capture for recorded steps.
//!
//! Captures where a dispatch originated. The visible trace must start at the
//! first frame outside the recording/dispatch infrastructure, so the
//! provider trims the recorder's own leading frames before handing the
//! trace to a step.

use std::backtrace::Backtrace;

/// Frames belonging to the recording/dispatch machinery itself, trimmed off
/// the top of every captured trace.
const INFRASTRUCTURE_MARKERS: &[&str] = &[
    "store_devtools::recorder",
    "store_devtools::store",
    "std::backtrace",
    "backtrace::",
];

/// Capture capability for step stack traces.
pub trait TraceProvider {
    /// Captures the current call stack as an opaque display string.
    fn capture(&self) -> String;
}

/// Default provider backed by `std::backtrace`.
///
/// Captures regardless of `RUST_BACKTRACE` so recording behaves the same in
/// every environment; the cost is only paid when trace capture is enabled
/// in the devtools configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceProvider;

impl TraceProvider for BacktraceProvider {
    fn capture(&self) -> String {
        trim_infrastructure_frames(&Backtrace::force_capture().to_string())
    }
}

/// Drops leading frames that belong to the recording/dispatch
/// infrastructure, so the trace starts at the first application frame.
///
/// Falls back to the untrimmed trace when no application frame can be
/// identified (e.g. a fully inlined call path).
pub fn trim_infrastructure_frames(raw: &str) -> String {
    let mut kept = Vec::new();
    let mut keeping = false;

    for line in raw.lines() {
        if !keeping {
            let trimmed = line.trim_start();
            let is_frame_header = trimmed
                .chars()
                .next()
                .map_or(false, |c| c.is_ascii_digit())
                && trimmed.contains(": ");
            if is_frame_header
                && !INFRASTRUCTURE_MARKERS
                    .iter()
                    .any(|marker| line.contains(marker))
            {
                keeping = true;
            }
        }
        if keeping {
            kept.push(line);
        }
    }

    if kept.is_empty() {
        raw.to_string()
    } else {
        kept.join("\n")
    }
}

use super::sanitize::{sanitize_events, SanitizeOptions};
use linesync_core::{OutputEvent, RawOutputEvent, RenderRecord, StructuredIssue};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    pub records: Vec<RenderRecord>,
    pub issues: Vec<StructuredIssue>,
}

/// Aligns compiler output events to display lines.
///
/// Events are stably sorted by source line and walked with a display cursor
/// starting at 1. Gaps before an event are filled with blank records, each
/// event is placed at the cursor (which may already be past its source line)
/// and then reserves one slot per embedded newline, or a single slot when it
/// has none. Trailing gaps up to the largest source line are filled too.
///
/// Empty input yields an empty sequence. A `line` of 0 is placed at the
/// current cursor like any event that arrives behind it.
pub fn synchronize(mut events: Vec<OutputEvent>) -> Vec<RenderRecord> {
    if events.is_empty() {
        return Vec::new();
    }

    events.sort_by_key(|event| event.line);
    let max_line = events.iter().map(|event| event.line).max().unwrap_or(0);
    let event_count = events.len();

    let mut records = Vec::with_capacity(event_count);
    let mut cursor: u32 = 1;
    for event in events {
        if cursor < event.line {
            records.extend((cursor..event.line).map(RenderRecord::filler));
            cursor = event.line;
        }
        let slots = reserved_slots(event.text.as_str());
        trace!(
            source_line = event.line,
            display_line = cursor,
            slots,
            "placing output event"
        );
        records.push(RenderRecord::from_event(cursor, event));
        cursor = cursor.saturating_add(slots);
    }
    if cursor <= max_line {
        records.extend((cursor..=max_line).map(RenderRecord::filler));
    }

    debug!(
        events = event_count,
        records = records.len(),
        max_line,
        "synchronized output events"
    );
    records
}

/// Sanitizes wire events and synchronizes whatever survives.
pub fn synchronize_raw(raw: Vec<RawOutputEvent>, options: &SanitizeOptions) -> SyncOutcome {
    let sanitized = sanitize_events(raw, options);
    SyncOutcome {
        records: synchronize(sanitized.events),
        issues: sanitized.issues,
    }
}

fn reserved_slots(text: &str) -> u32 {
    let newlines = text.bytes().filter(|byte| *byte == b'\n').count();
    u32::try_from(newlines).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
#[path = "synchronize_test.rs"]
mod tests;

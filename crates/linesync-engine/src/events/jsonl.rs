use linesync_core::{RawOutputEvent, RenderRecord};
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EventDecodeError {
    #[error("event document decode failed: {0}")]
    Document(#[source] serde_json::Error),
    #[error("event JSONL decode failed at line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct EventEnvelope {
    #[serde(alias = "result")]
    events: Vec<RawOutputEvent>,
}

pub fn parse_event_jsonl_line(line: &str) -> serde_json::Result<RawOutputEvent> {
    serde_json::from_str::<RawOutputEvent>(line.trim_end())
}

pub fn encode_record_jsonl_line(record: &RenderRecord) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(record)?;
    line.push('\n');
    Ok(line)
}

/// Decodes one compiler response.
///
/// Accepts a JSON array of events, an object carrying them under `events`
/// (or `result`), or JSONL with one event per line. A document that is an
/// envelope but fails to decode reports the envelope error rather than a
/// JSONL one.
pub fn decode_event_document(text: &str) -> Result<Vec<RawOutputEvent>, EventDecodeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(EventDecodeError::Document);
    }
    let envelope_error = match serde_json::from_str::<EventEnvelope>(trimmed) {
        Ok(envelope) => return Ok(envelope.events),
        Err(error) => error,
    };
    if is_envelope(trimmed) {
        return Err(EventDecodeError::Document(envelope_error));
    }

    let mut events = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let event = parse_event_jsonl_line(line).map_err(|source| EventDecodeError::Line {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

fn is_envelope(trimmed: &str) -> bool {
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(object)) => object.contains_key("events") || object.contains_key("result"),
        Ok(_) => false,
        // JSONL starts with a complete value on its first line; a pretty-printed object does not.
        Err(_) => trimmed
            .lines()
            .next()
            .is_some_and(|first| serde_json::from_str::<IgnoredAny>(first).is_err()),
    }
}

#[cfg(test)]
#[path = "jsonl_test.rs"]
mod tests;

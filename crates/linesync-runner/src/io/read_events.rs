use linesync_core::RawOutputEvent;
use linesync_engine::{decode_event_document, EventDecodeError};
use std::fs;
use std::io::Read;
use tracing::debug;

pub const STDIN_TARGET: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum ReadEventsError {
    #[error("read events failed `{origin}`: {source}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("decode events failed `{origin}`: {source}")]
    Decode {
        origin: String,
        #[source]
        source: EventDecodeError,
    },
}

/// Reads one compiler response from a file, or from stdin when `target` is `-`.
pub fn read_events(target: &str) -> Result<Vec<RawOutputEvent>, ReadEventsError> {
    if target == STDIN_TARGET {
        let stdin = std::io::stdin();
        return read_events_from(stdin.lock(), "stdin");
    }
    let text = fs::read_to_string(target).map_err(|source| ReadEventsError::Read {
        origin: target.to_string(),
        source,
    })?;
    decode(text.as_str(), target)
}

pub fn read_events_from(
    mut reader: impl Read,
    origin: &str,
) -> Result<Vec<RawOutputEvent>, ReadEventsError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| ReadEventsError::Read {
            origin: origin.to_string(),
            source,
        })?;
    decode(text.as_str(), origin)
}

fn decode(text: &str, origin: &str) -> Result<Vec<RawOutputEvent>, ReadEventsError> {
    let events = decode_event_document(text).map_err(|source| ReadEventsError::Decode {
        origin: origin.to_string(),
        source,
    })?;
    debug!(origin, events = events.len(), "read output events");
    Ok(events)
}

#[cfg(test)]
#[path = "read_events_test.rs"]
mod tests;

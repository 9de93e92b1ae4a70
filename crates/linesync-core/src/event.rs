use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub const FILLER_TEXT: &str = "\n";

/// One unit of compiler output as it arrives on the wire.
///
/// `line` and `time` stay undecoded JSON values so that zero, negative,
/// fractional, `null` (how JSON carries NaN and Infinity) or non-numeric
/// attributions survive decoding and can be reported by the sanitizer
/// instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOutputEvent {
    #[serde(default)]
    pub line: Value,
    #[serde(default)]
    pub text: String,
    #[serde(default = "zero_time")]
    pub time: Value,
}

impl RawOutputEvent {
    pub fn new(line: impl Into<Value>, text: impl Into<String>, time: impl Into<Value>) -> Self {
        Self {
            line: line.into(),
            text: text.into(),
            time: time.into(),
        }
    }
}

fn zero_time() -> Value {
    Value::from(0)
}

/// A compiler output event attributed to a 1-based source line.
///
/// `time` is opaque and kept as the JSON number it arrived as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputEvent {
    pub line: u32,
    pub text: String,
    pub time: Number,
}

impl OutputEvent {
    pub fn new(line: u32, text: impl Into<String>, time: impl Into<Number>) -> Self {
        Self {
            line,
            text: text.into(),
            time: time.into(),
        }
    }
}

/// One display row handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRecord {
    pub line: u32,
    pub text: String,
    pub time: Number,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub filler: bool,
}

impl RenderRecord {
    pub fn from_event(line: u32, event: OutputEvent) -> Self {
        Self {
            line,
            text: event.text,
            time: event.time,
            filler: false,
        }
    }

    pub fn filler(line: u32) -> Self {
        Self {
            line,
            text: FILLER_TEXT.to_string(),
            time: Number::from(0),
            filler: true,
        }
    }

    pub fn is_filler(&self) -> bool {
        self.filler
    }
}

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;

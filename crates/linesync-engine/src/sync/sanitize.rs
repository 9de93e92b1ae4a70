use linesync_core::{FieldPath, IssueSeverity, OutputEvent, RawOutputEvent, StructuredIssue};
use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};
use tracing::warn;

pub const DEFAULT_MAX_LINE: u32 = 1_000_000;

/// What to do with events whose `line` is below 1 or not a whole number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinePolicy {
    #[default]
    Drop,
    Clamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOptions {
    pub line_policy: LinePolicy,
    pub max_line: u32,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            line_policy: LinePolicy::Drop,
            max_line: DEFAULT_MAX_LINE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SanitizeOutcome {
    pub events: Vec<OutputEvent>,
    pub issues: Vec<StructuredIssue>,
}

pub fn sanitize_events(raw: Vec<RawOutputEvent>, options: &SanitizeOptions) -> SanitizeOutcome {
    let mut outcome = SanitizeOutcome {
        events: Vec::with_capacity(raw.len()),
        issues: Vec::new(),
    };

    for (index, event) in raw.into_iter().enumerate() {
        let time = match event.time {
            Value::Number(time) => time,
            Value::Null => {
                outcome.issues.push(coerced(
                    index,
                    "time",
                    "event.time.non_finite",
                    "time is null (NaN or Infinity upstream), using 0".to_string(),
                    json!({ "time": null }),
                ));
                Number::from(0)
            }
            other => {
                outcome.issues.push(coerced(
                    index,
                    "time",
                    "event.time.not_a_number",
                    format!("time `{other}` is not a number, using 0"),
                    json!({ "time": other }),
                ));
                Number::from(0)
            }
        };

        match sanitize_line(index, &event.line, options) {
            Ok((line, issue)) => {
                outcome.issues.extend(issue);
                outcome.events.push(OutputEvent {
                    line,
                    text: event.text,
                    time,
                });
            }
            Err(issue) => outcome.issues.push(issue),
        }
    }

    StructuredIssue::sort_stable(&mut outcome.issues);
    outcome
}

fn sanitize_line(
    index: usize,
    raw: &Value,
    options: &SanitizeOptions,
) -> Result<(u32, Option<StructuredIssue>), StructuredIssue> {
    let line = match raw {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::Null => {
            return Err(rejected(
                index,
                "event.line.non_finite",
                "line is null or missing (NaN or Infinity upstream)".to_string(),
                raw,
            ))
        }
        other => {
            return Err(rejected(
                index,
                "event.line.not_a_number",
                format!("line `{other}` is not a number"),
                raw,
            ))
        }
    };
    if !line.is_finite() {
        return Err(rejected(
            index,
            "event.line.non_finite",
            format!("line `{line}` is not finite"),
            raw,
        ));
    }
    if line > f64::from(options.max_line) {
        return Err(rejected(
            index,
            "event.line.out_of_range",
            format!("line `{line}` exceeds the maximum of {}", options.max_line),
            raw,
        ));
    }

    if line < 1.0 {
        return match options.line_policy {
            LinePolicy::Drop => Err(rejected(
                index,
                "event.line.non_positive",
                format!("line `{line}` must be >= 1"),
                raw,
            )),
            LinePolicy::Clamp => Ok((
                1,
                Some(coerced(
                    index,
                    "line",
                    "event.line.non_positive",
                    format!("line `{line}` clamped to 1"),
                    json!({ "line": raw }),
                )),
            )),
        };
    }

    if line.fract() != 0.0 {
        return match options.line_policy {
            LinePolicy::Drop => Err(rejected(
                index,
                "event.line.fractional",
                format!("line `{line}` is not a whole number"),
                raw,
            )),
            LinePolicy::Clamp => Ok((
                line.trunc() as u32,
                Some(coerced(
                    index,
                    "line",
                    "event.line.fractional",
                    format!("line `{line}` truncated to {}", line.trunc()),
                    json!({ "line": raw }),
                )),
            )),
        };
    }

    Ok((line as u32, None))
}

fn rejected(index: usize, reference: &str, message: String, line: &Value) -> StructuredIssue {
    warn!(index, reference, "dropping output event: {message}");
    StructuredIssue::new(
        "event_rejected",
        IssueSeverity::Error,
        event_field(index, "line"),
        message,
    )
    .with_reference(reference)
    .with_related(json!({ "line": line }))
}

fn coerced(
    index: usize,
    field: &str,
    reference: &str,
    message: String,
    related: serde_json::Value,
) -> StructuredIssue {
    warn!(index, reference, "coercing output event: {message}");
    StructuredIssue::new(
        "event_coerced",
        IssueSeverity::Warning,
        event_field(index, field),
        message,
    )
    .with_reference(reference)
    .with_related(related)
}

fn event_field(index: usize, field: &str) -> FieldPath {
    FieldPath::root().key("events").index(index).key(field)
}

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod tests;

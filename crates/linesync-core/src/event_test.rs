use super::{RawOutputEvent, RenderRecord, FILLER_TEXT};
use crate::OutputEvent;
use serde_json::{json, Number, Value};

#[test]
fn raw_event_defaults_missing_text_and_time() {
    let raw: RawOutputEvent = serde_json::from_value(json!({"line": 4})).expect("must decode");
    assert_eq!(raw, RawOutputEvent::new(4, "", 0));
}

#[test]
fn raw_event_keeps_fractional_and_negative_lines() {
    let raw: RawOutputEvent =
        serde_json::from_value(json!({"line": -2.5, "text": "x", "time": 3})).expect("must decode");
    assert_eq!(raw.line, json!(-2.5));
    assert_eq!(raw.time, json!(3));
}

#[test]
fn raw_event_accepts_null_and_non_numeric_fields() {
    let raw: RawOutputEvent =
        serde_json::from_value(json!({"line": null, "text": "nan", "time": null}))
            .expect("must decode");
    assert_eq!(raw.line, Value::Null);
    assert_eq!(raw.time, Value::Null);

    let raw: RawOutputEvent =
        serde_json::from_value(json!({"line": "3", "text": "x"})).expect("must decode");
    assert_eq!(raw.line, json!("3"));

    let raw: RawOutputEvent = serde_json::from_value(json!({"text": "x"})).expect("must decode");
    assert_eq!(raw.line, Value::Null);
}

#[test]
fn non_finite_constructor_values_become_null() {
    let raw = RawOutputEvent::new(f64::NAN, "x", f64::INFINITY);
    assert_eq!(raw.line, Value::Null);
    assert_eq!(raw.time, Value::Null);
}

#[test]
fn filler_record_uses_placeholder_and_zero_time() {
    let record = RenderRecord::filler(7);
    assert_eq!(record.line, 7);
    assert_eq!(record.text, FILLER_TEXT);
    assert_eq!(record.time, Number::from(0));
    assert!(record.is_filler());
}

#[test]
fn event_record_omits_filler_flag_when_serialized() {
    let time = Number::from_f64(12.5).expect("finite");
    let record = RenderRecord::from_event(2, OutputEvent::new(9, "hello", time));
    let encoded = serde_json::to_value(&record).expect("must encode");
    assert_eq!(encoded, json!({"line": 2, "text": "hello", "time": 12.5}));

    let filler = serde_json::to_value(RenderRecord::filler(3)).expect("must encode");
    assert_eq!(filler["filler"], json!(true));
}

#[test]
fn integer_time_is_passed_through_unchanged() {
    let event: OutputEvent =
        serde_json::from_str(r#"{"line":1,"text":"x","time":9007199254740993}"#)
            .expect("must decode");
    let encoded = serde_json::to_string(&RenderRecord::from_event(1, event)).expect("must encode");
    assert_eq!(encoded, r#"{"line":1,"text":"x","time":9007199254740993}"#);
}

use super::{IssueSeverity, StructuredIssue};
use crate::FieldPath;
use serde_json::json;

#[test]
fn issues_are_sorted_by_severity_then_path() {
    let mut issues = vec![
        StructuredIssue::new(
            "event_sanitized",
            IssueSeverity::Warning,
            FieldPath::root().key("events").index(1).key("time"),
            "time coerced",
        ),
        StructuredIssue::new(
            "event_rejected",
            IssueSeverity::Error,
            FieldPath::root().key("events").index(4).key("line"),
            "second",
        ),
        StructuredIssue::new(
            "event_rejected",
            IssueSeverity::Error,
            FieldPath::root().key("events").index(0).key("line"),
            "first",
        ),
    ];

    StructuredIssue::sort_stable(&mut issues);

    assert_eq!(issues[0].message, "first");
    assert_eq!(issues[1].message, "second");
    assert_eq!(issues[2].severity, IssueSeverity::Warning);
}

#[test]
fn issue_serializes_path_reference_and_related() {
    let issue = StructuredIssue::new(
        "event_rejected",
        IssueSeverity::Error,
        FieldPath::root().key("events").index(2).key("line"),
        "line must be >= 1",
    )
    .with_reference("event.line.non_positive")
    .with_related(json!({"line": -1.0}));

    assert!(issue.is_error());
    let encoded = serde_json::to_value(&issue).expect("must encode");
    assert_eq!(encoded["severity"], json!("error"));
    assert_eq!(encoded["reference"], json!("event.line.non_positive"));
    assert_eq!(encoded["related"]["line"], json!(-1.0));
}

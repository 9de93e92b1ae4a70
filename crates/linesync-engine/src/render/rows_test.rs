use super::{record_rows, render_rows, render_text, RenderOptions};
use linesync_core::{OutputEvent, RenderRecord};
use serde_json::Number;

fn placed(line: u32, text: &str, time: impl Into<Number>) -> RenderRecord {
    RenderRecord::from_event(line, OutputEvent::new(line, text, time))
}

#[test]
fn filler_renders_as_single_blank_row() {
    let filler = RenderRecord::filler(2);
    let rows = record_rows(&filler).collect::<Vec<_>>();
    assert_eq!(rows, vec![""]);
}

#[test]
fn trailing_newline_does_not_add_a_row() {
    let record = placed(1, "x\n", 0);
    assert_eq!(record_rows(&record).collect::<Vec<_>>(), vec!["x"]);

    let record = placed(1, "a\nb\nc", 0);
    assert_eq!(record_rows(&record).collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn gutter_marks_first_row_of_each_record() {
    let records = vec![
        placed(1, "a\nb", 0),
        RenderRecord::filler(2),
        placed(3, "c", 0),
    ];
    let rows = render_rows(&records, &RenderOptions::default());
    assert_eq!(rows, vec!["1 | a", "  | b", "2 |", "3 | c"]);
}

#[test]
fn gutter_width_follows_last_display_line() {
    let mut records = (1..=9).map(RenderRecord::filler).collect::<Vec<_>>();
    records.push(placed(10, "ten", 0));
    let rows = render_rows(&records, &RenderOptions::default());
    assert_eq!(rows[0], " 1 |");
    assert_eq!(rows[9], "10 | ten");
}

#[test]
fn show_time_annotates_timed_events_only() {
    let records = vec![
        placed(1, "fast", 0),
        placed(2, "slow", Number::from_f64(12.5).expect("finite")),
        placed(3, "steady", 40),
        RenderRecord::filler(4),
    ];
    let text = render_text(
        &records,
        &RenderOptions {
            line_numbers: false,
            show_time: true,
        },
    );
    assert_eq!(text, "fast\nslow  (12.5ms)\nsteady  (40ms)\n");
}

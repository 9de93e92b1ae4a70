pub mod divider;
pub mod events;
pub mod render;
pub mod sync;

pub use divider::{
    ContainerGeometry, DividerBounds, DividerState, NudgeDirection, DEFAULT_RATIO, KEYBOARD_STEP,
};
pub use events::{
    decode_event_document, encode_record_jsonl_line, parse_event_jsonl_line, EventDecodeError,
};
pub use render::{
    record_rows, render_rows, render_side_by_side, render_text, summarize, RenderOptions,
    RenderSummary, SideBySide,
};
pub use sync::{
    sanitize_events, synchronize, synchronize_raw, LinePolicy, SanitizeOptions, SanitizeOutcome,
    SyncOutcome, DEFAULT_MAX_LINE,
};

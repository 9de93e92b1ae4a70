mod sanitize;
mod synchronize;

pub use sanitize::{sanitize_events, LinePolicy, SanitizeOptions, SanitizeOutcome, DEFAULT_MAX_LINE};
pub use synchronize::{synchronize, synchronize_raw, SyncOutcome};

mod read_events;

pub use read_events::{read_events, read_events_from, ReadEventsError};

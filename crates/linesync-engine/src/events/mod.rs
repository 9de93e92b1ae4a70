mod jsonl;

pub use jsonl::{
    decode_event_document, encode_record_jsonl_line, parse_event_jsonl_line, EventDecodeError,
};

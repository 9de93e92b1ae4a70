pub mod digest;
pub mod event;
pub mod field_path;
pub mod issues;

pub use digest::records_digest_hex;
pub use event::{OutputEvent, RawOutputEvent, RenderRecord, FILLER_TEXT};
pub use field_path::{FieldPath, FieldPathSegment};
pub use issues::{IssueSeverity, StructuredIssue};

use crate::event::RenderRecord;
use sha2::{Digest, Sha256};

/// Content hash of a synchronized sequence, used by the presentation layer
/// to skip repainting when a newer compiler response renders identically.
pub fn records_digest_hex(records: &[RenderRecord]) -> serde_json::Result<String> {
    let bytes = serde_json::to_vec(records)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{digest:x}"))
}

#[cfg(test)]
#[path = "digest_test.rs"]
mod tests;

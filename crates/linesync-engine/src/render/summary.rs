use linesync_core::{records_digest_hex, RenderRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub records: usize,
    pub events: usize,
    pub fillers: usize,
    pub last_line: u32,
    pub digest: String,
}

pub fn summarize(records: &[RenderRecord]) -> serde_json::Result<RenderSummary> {
    let fillers = records.iter().filter(|record| record.is_filler()).count();
    Ok(RenderSummary {
        records: records.len(),
        events: records.len() - fillers,
        fillers,
        last_line: records.last().map(|record| record.line).unwrap_or(0),
        digest: records_digest_hex(records)?,
    })
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;

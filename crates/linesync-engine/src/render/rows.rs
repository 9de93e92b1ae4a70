use linesync_core::RenderRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub line_numbers: bool,
    pub show_time: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            show_time: false,
        }
    }
}

/// Visual rows of one record: a single trailing newline is dropped, the
/// remainder splits on `\n`. The filler therefore renders as one blank row.
pub fn record_rows(record: &RenderRecord) -> impl Iterator<Item = &str> {
    let body = record
        .text
        .strip_suffix('\n')
        .unwrap_or(record.text.as_str());
    body.split('\n')
}

pub fn render_rows(records: &[RenderRecord], options: &RenderOptions) -> Vec<String> {
    let gutter_width = records
        .last()
        .map(|record| record.line.to_string().len())
        .unwrap_or(1);

    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        for (index, row) in record_rows(record).enumerate() {
            let mut out = String::new();
            if options.line_numbers {
                if index == 0 {
                    out.push_str(format!("{:>gutter_width$} | ", record.line).as_str());
                } else {
                    out.push_str(format!("{:>gutter_width$} | ", "").as_str());
                }
            }
            out.push_str(row);
            let timed = record.time.as_f64().is_some_and(|time| time != 0.0);
            if index == 0 && options.show_time && !record.is_filler() && timed {
                out.push_str(format!("  ({}ms)", record.time).as_str());
            }
            if row.is_empty() {
                out.truncate(out.trim_end().len());
            }
            rows.push(out);
        }
    }
    rows
}

pub fn render_text(records: &[RenderRecord], options: &RenderOptions) -> String {
    render_rows(records, options).join("\n")
}

#[cfg(test)]
#[path = "rows_test.rs"]
mod tests;

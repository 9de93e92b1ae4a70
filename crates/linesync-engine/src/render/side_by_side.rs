use super::rows::{render_rows, RenderOptions};
use crate::divider::DEFAULT_RATIO;
use linesync_core::RenderRecord;

const SEPARATOR: &str = " │ ";

/// Terminal rendition of the editor/output split.
#[derive(Debug, Clone, PartialEq)]
pub struct SideBySide {
    pub width: usize,
    pub ratio: f64,
    pub options: RenderOptions,
}

/// Source lines on the left, synchronized output on the right, one row per
/// display line so output sits beside the statement that produced it.
pub fn render_side_by_side(source: &str, records: &[RenderRecord], layout: &SideBySide) -> String {
    let ratio = if layout.ratio.is_finite() {
        layout.ratio.clamp(0.0, 1.0)
    } else {
        DEFAULT_RATIO
    };
    let available = layout.width.saturating_sub(SEPARATOR.chars().count());
    let left_width = ((available as f64) * ratio).round() as usize;
    let right_width = available.saturating_sub(left_width);

    let source_lines = source.lines().collect::<Vec<_>>();
    let gutter_width = source_lines.len().max(1).to_string().len();
    let left = source_lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            if layout.options.line_numbers {
                format!("{:>gutter_width$} | {line}", index + 1)
            } else {
                (*line).to_string()
            }
        })
        .collect::<Vec<_>>();
    let right = render_rows(
        records,
        &RenderOptions {
            line_numbers: false,
            show_time: layout.options.show_time,
        },
    );

    let row_count = left.len().max(right.len());
    let mut out = Vec::with_capacity(row_count);
    for index in 0..row_count {
        let left_cell = left.get(index).map(String::as_str).unwrap_or("");
        let right_cell = right.get(index).map(String::as_str).unwrap_or("");
        let row = format!(
            "{}{SEPARATOR}{}",
            fit(left_cell, left_width),
            truncate(right_cell, right_width)
        );
        out.push(row.trim_end().to_string());
    }
    out.join("\n")
}

fn fit(cell: &str, width: usize) -> String {
    let mut out = truncate(cell, width).to_string();
    let used = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

fn truncate(cell: &str, width: usize) -> &str {
    match cell.char_indices().nth(width) {
        Some((byte_index, _)) => &cell[..byte_index],
        None => cell,
    }
}

#[cfg(test)]
#[path = "side_by_side_test.rs"]
mod tests;

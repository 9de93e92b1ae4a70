mod rows;
mod side_by_side;
mod summary;

pub use rows::{record_rows, render_rows, render_text, RenderOptions};
pub use side_by_side::{render_side_by_side, SideBySide};
pub use summary::{summarize, RenderSummary};

use crate::presentation::view_models::{StatusViewModel, TableBodyViewModel};

pub const LOADING_MESSAGE: &str = "Loading contacts…";
pub const ERROR_MESSAGE: &str = "Failed to load contacts. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No contacts match your search.";
pub const STATUS_FAILED: &str = "Failed to load contacts";

/// Affordance shown next to a copyable alias.
pub const COPY_GLYPH: &str = "⧉";
/// Shown in place of [`COPY_GLYPH`] right after a successful copy.
pub const COPIED_GLYPH: &str = "✓";

pub fn status_text(status: &StatusViewModel) -> String {
    match status {
        StatusViewModel::Failed => STATUS_FAILED.to_string(),
        StatusViewModel::Filtered { shown, total } => format!("{} of {}", shown, total),
        StatusViewModel::Total { total } => format!("{} total", total),
    }
}

/// Single-row message that replaces the table rows, if any.
pub fn body_message(body: &TableBodyViewModel) -> Option<&'static str> {
    match body {
        TableBodyViewModel::Loading => Some(LOADING_MESSAGE),
        TableBodyViewModel::Error { .. } => Some(ERROR_MESSAGE),
        TableBodyViewModel::Empty => Some(EMPTY_MESSAGE),
        TableBodyViewModel::Populated { .. } => None,
    }
}

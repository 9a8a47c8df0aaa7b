//! Input components: each owns a piece of UI state and turns key presses
//! into actions for the renderer to apply.

mod header_focus;
mod row_selection;
mod search_input;

pub use header_focus::HeaderFocus;
pub use row_selection::RowSelection;
pub use search_input::{SearchAction, SearchInput};

use contactview_types::SortColumn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Sort(SortColumn),
    CopyAlias(usize),
    OpenPhone(usize),
    FocusRows,
}

use serde::Serialize;

use super::contacts::ContactListViewModel;
use super::theme::ThemeViewModel;

/// Which region receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Search,
    Headers,
    Rows,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Headers,
            Focus::Headers => Focus::Rows,
            Focus::Rows => Focus::Search,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::Rows,
            Focus::Headers => Focus::Search,
            Focus::Rows => Focus::Headers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarViewModel {
    pub input: String,
    pub focused: bool,
    /// Clear affordance is visible only while the trimmed query is non-empty
    pub show_clear: bool,
}

/// Everything one TUI frame needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TuiScreenViewModel {
    pub focus: Focus,
    pub search: SearchBarViewModel,
    pub table: ContactListViewModel,
    pub theme: ThemeViewModel,
    /// Header column with keyboard focus, if the header row is focused
    pub focused_header: Option<usize>,
    /// Row whose copy confirmation is currently showing
    pub copied_row: Option<usize>,
}

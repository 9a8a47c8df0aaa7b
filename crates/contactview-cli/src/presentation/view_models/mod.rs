pub mod common;
pub mod config;
pub mod contacts;
pub mod result;
pub mod theme;
pub mod tui;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::ConfigViewModel;
pub use contacts::{
    AliasCell, ColumnHeaderViewModel, ContactListViewModel, ContactRowViewModel, PhoneCell,
    StatusViewModel, TableBodyViewModel,
};
pub use result::CommandResultViewModel;
pub use theme::{ThemeSource, ThemeViewModel};
pub use tui::{Focus, SearchBarViewModel, TuiScreenViewModel};

use std::fmt;

/// Bridge from a ViewModel to its text rendering.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;

    /// Rows for `--format csv`, header first. `None` when the data has no
    /// tabular form.
    fn csv_records(&self) -> Option<Vec<Vec<String>>> {
        None
    }
}

use contactview_types::{AriaSort, SortColumn, SortDirection};
use serde::Serialize;

/// Alias column content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AliasCell {
    /// Absent or the "N/A" sentinel; rendered as plain `N/A`
    Missing,
    /// Interactive: shows the alias and copies it on activation
    Copyable { text: String },
}

/// Phone column content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhoneCell {
    Missing,
    /// `text` is the phone as stored, `href` the `tel:` target
    Link { text: String, href: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRowViewModel {
    pub alias: AliasCell,
    pub name: String,
    pub phone: PhoneCell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeaderViewModel {
    pub column: SortColumn,
    pub label: String,
    /// Accessibility contract: `ascending`, `descending` or `none`
    pub aria_sort: AriaSort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TableBodyViewModel {
    Loading,
    Error { detail: String },
    Empty,
    Populated { rows: Vec<ContactRowViewModel> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StatusViewModel {
    Failed,
    Filtered { shown: usize, total: usize },
    Total { total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactListViewModel {
    pub source: String,
    pub query: String,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    pub columns: Vec<ColumnHeaderViewModel>,
    pub body: TableBodyViewModel,
    pub status: StatusViewModel,
}

impl ContactListViewModel {
    pub fn rows(&self) -> &[ContactRowViewModel] {
        match &self.body {
            TableBodyViewModel::Populated { rows } => rows,
            _ => &[],
        }
    }
}

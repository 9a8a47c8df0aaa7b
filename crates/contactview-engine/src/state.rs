use contactview_types::{AriaSort, ContactRecord, LoadError, SortColumn, SortDirection};

use crate::filter::normalize_query;
use crate::projection::project;

/// What the table body shows, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody<'a> {
    /// No load result has been applied yet
    Loading,
    /// The data source failed; shown regardless of any records
    Error(&'a str),
    /// Loaded, but nothing survives the filter (or nothing was loaded)
    Empty,
    Populated(&'a [ContactRecord]),
}

/// Raw data behind the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Failed,
    Filtered { shown: usize, total: usize },
    Total(usize),
}

/// Mutable view state: master records, query, sort key and load error.
///
/// `filtered_records` is never edited directly. Every setter re-derives it
/// from the other fields via [`project`], so it cannot drift from its inputs.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    all_records: Vec<ContactRecord>,
    query: String,
    sort_column: SortColumn,
    sort_direction: SortDirection,
    load_error: Option<String>,
    filtered_records: Vec<ContactRecord>,
    loaded: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.sort_column = column;
        self.sort_direction = direction;
        self.recompute();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self.recompute();
        self
    }

    /// Apply a data source result. Success replaces the records wholesale and
    /// clears any earlier error; failure discards all records.
    pub fn apply_load(&mut self, result: Result<Vec<ContactRecord>, LoadError>) {
        self.loaded = true;
        match result {
            Ok(records) => {
                self.all_records = records;
                self.load_error = None;
            }
            Err(err) => {
                self.all_records = Vec::new();
                self.load_error = Some(err.to_string());
            }
        }
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Header activation: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn activate_column(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Ascending;
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered_records = project(
            &self.all_records,
            &self.query,
            self.sort_column,
            self.sort_direction,
        );
    }

    pub fn all_records(&self) -> &[ContactRecord] {
        &self.all_records
    }

    pub fn filtered_records(&self) -> &[ContactRecord] {
        &self.filtered_records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_query(&self) -> bool {
        !normalize_query(&self.query).is_empty()
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn body(&self) -> TableBody<'_> {
        if !self.loaded {
            return TableBody::Loading;
        }
        if let Some(err) = &self.load_error {
            return TableBody::Error(err);
        }
        if self.filtered_records.is_empty() {
            return TableBody::Empty;
        }
        TableBody::Populated(&self.filtered_records)
    }

    pub fn status(&self) -> StatusLine {
        if self.load_error.is_some() {
            StatusLine::Failed
        } else if self.has_query() {
            StatusLine::Filtered {
                shown: self.filtered_records.len(),
                total: self.all_records.len(),
            }
        } else {
            StatusLine::Total(self.all_records.len())
        }
    }

    /// `aria-sort` value for a header: only the active column carries a direction.
    pub fn sort_indicator(&self, column: SortColumn) -> AriaSort {
        if column == self.sort_column {
            self.sort_direction.into()
        } else {
            AriaSort::None
        }
    }
}

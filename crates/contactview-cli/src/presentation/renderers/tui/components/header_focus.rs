use contactview_types::SortColumn;
use crossterm::event::{KeyCode, KeyEvent};

use super::TableAction;

/// Keyboard focus within the header row.
#[derive(Debug, Default)]
pub struct HeaderFocus {
    index: usize,
}

impl HeaderFocus {
    pub fn new(column: SortColumn) -> Self {
        Self {
            index: column.index(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn focus(&mut self, column: SortColumn) {
        self.index = column.index();
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<TableAction> {
        let last = SortColumn::ALL.len() - 1;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.index = self.index.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.index = (self.index + 1).min(last);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                SortColumn::from_index(self.index).map(TableAction::Sort)
            }
            KeyCode::Down | KeyCode::Char('j') => Some(TableAction::FocusRows),
            _ => None,
        }
    }
}

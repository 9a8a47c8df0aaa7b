use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::TableState;

use super::TableAction;

const PAGE: usize = 10;

/// Selected row in the filtered view. Always clamped to the row count.
#[derive(Debug, Default)]
pub struct RowSelection {
    state: TableState,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn offset(&self) -> usize {
        self.state.offset()
    }

    pub fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }

    pub fn select(&mut self, index: usize, len: usize) {
        if len == 0 {
            self.state.select(None);
        } else {
            self.state.select(Some(index.min(len - 1)));
        }
    }

    /// Re-clamp after the row set changed.
    pub fn clamp(&mut self, len: usize) {
        match self.state.selected() {
            Some(index) => self.select(index, len),
            None if len > 0 => self.state.select(Some(0)),
            None => {}
        }
        if len == 0 {
            *self.state.offset_mut() = 0;
        }
    }

    fn step(&mut self, delta: isize, len: usize) {
        let current = self.state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta);
        self.select(next, len);
    }

    pub fn handle_input(&mut self, key: KeyEvent, len: usize) -> Option<TableAction> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.step(1, len),
            KeyCode::Up | KeyCode::Char('k') => self.step(-1, len),
            KeyCode::PageDown => self.step(PAGE as isize, len),
            KeyCode::PageUp => self.step(-(PAGE as isize), len),
            KeyCode::Home | KeyCode::Char('g') => self.select(0, len),
            KeyCode::End | KeyCode::Char('G') => self.select(usize::MAX, len),
            KeyCode::Char('c') | KeyCode::Char('y') => {
                return self.selected().map(TableAction::CopyAlias);
            }
            KeyCode::Enter | KeyCode::Char('o') => {
                return self.selected().map(TableAction::OpenPhone);
            }
            _ => {}
        }
        None
    }
}

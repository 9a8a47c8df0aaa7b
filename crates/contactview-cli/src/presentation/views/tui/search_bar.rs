use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::formatters::sanitize;
use crate::presentation::view_models::{SearchBarViewModel, ThemeViewModel};

const CLEAR_LABEL: &str = "[× clear]";
const PLACEHOLDER: &str = "Type to filter by alias, name or phone";

fn toggle_label(theme: &ThemeViewModel) -> &'static str {
    if theme.aria_pressed {
        "[☾ dark]"
    } else {
        "[☀ light]"
    }
}

/// Rectangles inside the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBarAreas {
    pub input: Rect,
    pub clear: Rect,
    pub toggle: Rect,
}

impl SearchBarAreas {
    pub fn split(area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let [input, clear, toggle] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(CLEAR_LABEL.chars().count() as u16 + 1),
            Constraint::Length(10),
        ])
        .areas(inner);
        Self {
            input,
            clear,
            toggle,
        }
    }
}

pub struct SearchBarView<'a> {
    model: &'a SearchBarViewModel,
    theme: &'a ThemeViewModel,
    palette: &'a Palette,
}

impl<'a> SearchBarView<'a> {
    pub fn new(
        model: &'a SearchBarViewModel,
        theme: &'a ThemeViewModel,
        palette: &'a Palette,
    ) -> Self {
        Self {
            model,
            theme,
            palette,
        }
    }
}

impl<'a> Widget for SearchBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(self.palette.border(self.model.focused))
            .style(self.palette.base());
        block.render(area, buf);

        let areas = SearchBarAreas::split(area);

        let input = if self.model.input.is_empty() && !self.model.focused {
            Line::from(Span::styled(PLACEHOLDER, self.palette.muted()))
        } else {
            Line::from(Span::styled(sanitize(&self.model.input), self.palette.base()))
        };
        Paragraph::new(input).render(areas.input, buf);

        if self.model.show_clear {
            Paragraph::new(Span::styled(CLEAR_LABEL, self.palette.key())).render(areas.clear, buf);
        }

        Paragraph::new(Span::styled(toggle_label(self.theme), self.palette.key()))
            .render(areas.toggle, buf);
    }
}

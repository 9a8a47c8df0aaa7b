use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Palette;
use crate::presentation::formatters::{sanitize, status_text};
use crate::presentation::view_models::{ContactListViewModel, Focus, StatusViewModel};

/// Status line: result counts on the left, data source on the right.
pub struct StatusBarView<'a> {
    model: &'a ContactListViewModel,
    palette: &'a Palette,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a ContactListViewModel, palette: &'a Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(area);

        let style = match self.model.status {
            StatusViewModel::Failed => self.palette.base().fg(self.palette.error),
            _ => self.palette.base(),
        };
        Paragraph::new(Span::styled(format!(" {}", status_text(&self.model.status)), style))
            .style(self.palette.base())
            .render(left, buf);

        Paragraph::new(Span::styled(
            format!("{} ", sanitize(&self.model.source)),
            self.palette.muted(),
        ))
        .style(self.palette.base())
        .alignment(Alignment::Right)
        .render(right, buf);
    }
}

/// Key hints for the focused region.
pub struct HelpBarView<'a> {
    focus: Focus,
    palette: &'a Palette,
}

impl<'a> HelpBarView<'a> {
    pub fn new(focus: Focus, palette: &'a Palette) -> Self {
        Self { focus, palette }
    }
}

impl<'a> Widget for HelpBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints: &[(&str, &str)] = match self.focus {
            Focus::Search => &[
                ("[Tab]", "headers "),
                ("[Esc]", "rows "),
                ("[^U]", "clear "),
                ("[^T]", "theme "),
                ("[^C]", "quit"),
            ],
            Focus::Headers => &[
                ("[←/→]", "column "),
                ("[Enter]", "sort "),
                ("[/]", "search "),
                ("[t]", "heme "),
                ("[q]", "uit"),
            ],
            Focus::Rows => &[
                ("[j/k]", "move "),
                ("[c]", "opy alias "),
                ("[o]", "pen phone "),
                ("[1-3]", "sort "),
                ("[/]", "search "),
                ("[r]", "eload "),
                ("[t]", "heme "),
                ("[q]", "uit"),
            ],
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(*key, self.palette.key()));
            spans.push(Span::styled(*label, self.palette.muted()));
        }
        Paragraph::new(Line::from(spans))
            .style(self.palette.base())
            .render(area, buf);
    }
}

use contactview_types::NOT_AVAILABLE;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use super::Palette;
use crate::presentation::formatters::{COPIED_GLYPH, COPY_GLYPH, body_message, sanitize};
use crate::presentation::view_models::{
    AliasCell, ContactRowViewModel, Focus, PhoneCell, TableBodyViewModel, TuiScreenViewModel,
};
use crate::presentation::views::sort_glyph;

/// Alias, Name, Phone.
pub const COLUMN_WIDTHS: [Constraint; 3] = [
    Constraint::Fill(1),
    Constraint::Fill(2),
    Constraint::Fill(1),
];
const COLUMN_SPACING: u16 = 1;

/// Rectangles inside the table block: the header line, the scrolling body
/// and one rectangle per column for each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableAreas {
    pub header: Rect,
    pub body: Rect,
    pub headers: [Rect; 3],
    pub columns: [Rect; 3],
}

impl TableAreas {
    pub fn split(area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        let headers = Layout::horizontal(COLUMN_WIDTHS)
            .spacing(COLUMN_SPACING)
            .areas(header);
        let columns = Layout::horizontal(COLUMN_WIDTHS)
            .spacing(COLUMN_SPACING)
            .areas(body);
        Self {
            header,
            body,
            headers,
            columns,
        }
    }
}

pub struct ContactTableView<'a> {
    screen: &'a TuiScreenViewModel,
    palette: &'a Palette,
}

impl<'a> ContactTableView<'a> {
    pub fn new(screen: &'a TuiScreenViewModel, palette: &'a Palette) -> Self {
        Self { screen, palette }
    }

    fn alias_cell(&self, row: &ContactRowViewModel, copied: bool) -> Cell<'static> {
        match &row.alias {
            AliasCell::Copyable { text } => {
                let glyph = if copied { COPIED_GLYPH } else { COPY_GLYPH };
                Cell::from(Line::from(vec![
                    Span::raw(sanitize(text)),
                    Span::raw(" "),
                    Span::styled(glyph, self.palette.key()),
                ]))
            }
            AliasCell::Missing => Cell::from(Span::styled(NOT_AVAILABLE, self.palette.muted())),
        }
    }

    fn phone_cell(&self, row: &ContactRowViewModel) -> Cell<'static> {
        match &row.phone {
            PhoneCell::Link { text, .. } => {
                Cell::from(Span::styled(sanitize(text), self.palette.link()))
            }
            PhoneCell::Missing => Cell::from(Span::styled(NOT_AVAILABLE, self.palette.muted())),
        }
    }
}

impl<'a> StatefulWidget for ContactTableView<'a> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let focused = matches!(self.screen.focus, Focus::Headers | Focus::Rows);
        Block::default()
            .borders(Borders::ALL)
            .title(" Contacts ")
            .border_style(self.palette.border(focused))
            .style(self.palette.base())
            .render(area, buf);

        let areas = TableAreas::split(area);

        for (index, column) in self.screen.table.columns.iter().enumerate() {
            let glyph = sort_glyph(column.aria_sort);
            let label = if glyph.is_empty() {
                column.label.clone()
            } else {
                format!("{} {}", column.label, glyph)
            };
            let mut style = self.palette.base().add_modifier(Modifier::BOLD);
            if self.screen.focused_header == Some(index) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Paragraph::new(Span::styled(label, style)).render(areas.headers[index], buf);
        }

        if let Some(message) = body_message(&self.screen.table.body) {
            let style = match self.screen.table.body {
                TableBodyViewModel::Error { .. } => self.palette.base().fg(self.palette.error),
                _ => self.palette.muted(),
            };
            Paragraph::new(Span::styled(message, style))
                .alignment(Alignment::Center)
                .render(areas.body, buf);
            return;
        }

        let rows: Vec<Row> = self
            .screen
            .table
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                Row::new(vec![
                    self.alias_cell(row, self.screen.copied_row == Some(index)),
                    Cell::from(sanitize(&row.name)),
                    self.phone_cell(row),
                ])
            })
            .collect();

        let table = Table::new(rows, COLUMN_WIDTHS)
            .column_spacing(COLUMN_SPACING)
            .style(self.palette.base())
            .row_highlight_style(Style::default().bg(self.palette.selection));

        StatefulWidget::render(table, areas.body, buf, state);
    }
}

use std::fmt;

use contactview_types::{AriaSort, NOT_AVAILABLE};
use owo_colors::OwoColorize;

use crate::presentation::formatters::{body_message, sanitize, status_text, truncate};
use crate::presentation::view_models::{
    AliasCell, ContactListViewModel, ContactRowViewModel, CreateView, PhoneCell, ViewMode,
};

const MIN_NAME_WIDTH: usize = 8;
const DEFAULT_WIDTH: usize = 120;

pub fn sort_glyph(sort: AriaSort) -> &'static str {
    match sort {
        AriaSort::Ascending => "▲",
        AriaSort::Descending => "▼",
        AriaSort::None => "",
    }
}

fn alias_text(cell: &AliasCell) -> &str {
    match cell {
        AliasCell::Copyable { text } => text,
        AliasCell::Missing => NOT_AVAILABLE,
    }
}

fn phone_text(cell: &PhoneCell) -> &str {
    match cell {
        PhoneCell::Link { text, .. } => text,
        PhoneCell::Missing => NOT_AVAILABLE,
    }
}

fn phone_href(cell: &PhoneCell) -> &str {
    match cell {
        PhoneCell::Link { href, .. } => href,
        PhoneCell::Missing => "",
    }
}

impl CreateView for ContactListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            ViewMode::Minimal => Box::new(ContactRowsView { data: self }),
            ViewMode::Standard => Box::new(ContactTableView {
                data: self,
                verbose: false,
            }),
            ViewMode::Verbose => Box::new(ContactTableView {
                data: self,
                verbose: true,
            }),
        }
    }

    /// Display text with control characters replaced, like every other text mode.
    fn csv_records(&self) -> Option<Vec<Vec<String>>> {
        let mut records = vec![
            self.columns
                .iter()
                .map(|c| c.column.to_string())
                .collect::<Vec<_>>(),
        ];
        for row in self.rows() {
            records.push(vec![
                sanitize(alias_text(&row.alias)),
                sanitize(&row.name),
                sanitize(phone_text(&row.phone)),
            ]);
        }
        Some(records)
    }
}

/// `--quiet`: tab-separated rows, nothing else.
struct ContactRowsView<'a> {
    data: &'a ContactListViewModel,
}

impl<'a> fmt::Display for ContactRowsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = body_message(&self.data.body) {
            return writeln!(f, "{}", message);
        }
        for row in self.data.rows() {
            writeln!(
                f,
                "{}\t{}\t{}",
                sanitize(alias_text(&row.alias)),
                sanitize(&row.name),
                sanitize(phone_text(&row.phone))
            )?;
        }
        Ok(())
    }
}

struct ContactTableView<'a> {
    data: &'a ContactListViewModel,
    verbose: bool,
}

struct RenderedRow {
    alias: String,
    alias_missing: bool,
    name: String,
    phone: String,
    phone_missing: bool,
    href: String,
}

impl RenderedRow {
    fn from_row(row: &ContactRowViewModel) -> Self {
        Self {
            alias: sanitize(alias_text(&row.alias)),
            alias_missing: matches!(row.alias, AliasCell::Missing),
            name: sanitize(&row.name),
            phone: sanitize(phone_text(&row.phone)),
            phone_missing: matches!(row.phone, PhoneCell::Missing),
            href: sanitize(phone_href(&row.phone)),
        }
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn column_width<'r>(header: &str, cells: impl Iterator<Item = &'r str>) -> usize {
    cells
        .map(|c| c.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

impl<'a> fmt::Display for ContactTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verbose {
            writeln!(f, "{} {}", "Source:".dimmed(), sanitize(&self.data.source))?;
            if !self.data.query.trim().is_empty() {
                writeln!(f, "{} {}", "Query:".dimmed(), sanitize(&self.data.query))?;
            }
            writeln!(f)?;
        }

        let headers: Vec<String> = self
            .data
            .columns
            .iter()
            .map(|c| {
                let glyph = sort_glyph(c.aria_sort);
                if glyph.is_empty() {
                    c.label.clone()
                } else {
                    format!("{} {}", c.label, glyph)
                }
            })
            .collect();

        let rows: Vec<RenderedRow> = self.data.rows().iter().map(RenderedRow::from_row).collect();

        let alias_width = column_width(&headers[0], rows.iter().map(|r| r.alias.as_str()));
        let phone_width = column_width(&headers[2], rows.iter().map(|r| r.phone.as_str()));
        let mut name_width = column_width(&headers[1], rows.iter().map(|r| r.name.as_str()));

        let fixed = alias_width + phone_width + 4;
        let available = terminal_width().saturating_sub(fixed).max(MIN_NAME_WIDTH);
        if !self.verbose {
            name_width = name_width.min(available);
        }

        writeln!(
            f,
            "{}  {}  {}",
            pad(&headers[0], alias_width).bold(),
            pad(&headers[1], name_width).bold(),
            headers[2].bold()
        )?;

        if let Some(message) = body_message(&self.data.body) {
            writeln!(f, "{}", message)?;
        }

        for row in &rows {
            let alias = pad(&row.alias, alias_width);
            let name = pad(&truncate(&row.name, name_width), name_width);
            let alias = if row.alias_missing {
                alias.dimmed().to_string()
            } else {
                alias
            };
            let phone = if row.phone_missing {
                row.phone.dimmed().to_string()
            } else {
                row.phone.clone()
            };

            if self.verbose && !row.phone_missing {
                writeln!(
                    f,
                    "{}  {}  {}  {}",
                    alias,
                    name,
                    pad(&row.phone, phone_width),
                    row.href.cyan()
                )?;
            } else {
                writeln!(f, "{}  {}  {}", alias, name, phone)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", status_text(&self.data.status).dimmed())
    }
}

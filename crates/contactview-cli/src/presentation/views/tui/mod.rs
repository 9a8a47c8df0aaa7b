//! TUI View Components
//!
//! Ratatui widgets for the interactive table. Each widget borrows a
//! ViewModel and a [`Palette`]; none of them hold state or decide what to show.
//! Layout helpers are shared with the renderer so mouse hit-testing sees the
//! same rectangles the widgets paint into.

pub mod search_bar;
pub mod status_bar;
pub mod table;

pub use search_bar::{SearchBarAreas, SearchBarView};
pub use status_bar::{HelpBarView, StatusBarView};
pub use table::{ContactTableView, TableAreas};

use contactview_types::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub link: Color,
    pub error: Color,
    pub selection: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                fg: Color::Gray,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Yellow,
                link: Color::LightBlue,
                error: Color::LightRed,
                selection: Color::Rgb(48, 52, 70),
            },
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                link: Color::Blue,
                error: Color::Red,
                selection: Color::Rgb(210, 222, 240),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn key(&self) -> Style {
        self.base().fg(self.accent)
    }

    pub fn link(&self) -> Style {
        self.base().fg(self.link).add_modifier(Modifier::UNDERLINED)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.base().fg(self.accent)
        } else {
            self.muted()
        }
    }
}

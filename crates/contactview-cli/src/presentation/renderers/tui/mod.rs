//! Interactive contact table.
//!
//! ## Design:
//! - The renderer owns UI state (focus, search input, selection, timers)
//! - Row selection and ordering come from the engine's `ViewState`
//! - Every frame is rebuilt from a fresh `TuiScreenViewModel`
//! - Effects (load, clipboard, opener, preference store) come in through
//!   [`TuiServices`] so the controller runs against stubs in tests

mod components;

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use contactview_engine::ViewState;
use contactview_runtime::{DataWatcher, Debouncer, SEARCH_DEBOUNCE, WatchEvent};
use contactview_types::{ContactRecord, LoadError, SortColumn, Theme};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Position, Rect},
    widgets::Block,
};

use crate::context::ThemeSource;
use crate::platform::{
    ClipboardWriter, CopyOutcome, CopyTarget, LinkOpener, copy_in_background,
};
use crate::presentation::presenters::{ScreenContext, present_screen, tel_href};
use crate::presentation::view_models::Focus;
use crate::presentation::views::tui::{
    ContactTableView, HelpBarView, Palette, SearchBarAreas, SearchBarView, StatusBarView,
    TableAreas,
};

use components::{HeaderFocus, RowSelection, SearchAction, SearchInput, TableAction};

/// How long the copy confirmation glyph stays up.
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(1500);
const TICK_RATE: Duration = Duration::from_millis(250);

/// Persists the theme whenever the user toggles it.
pub trait ThemeStore {
    fn save_theme(&mut self, theme: Theme) -> Result<()>;
}

pub type Loader = Box<dyn FnMut() -> std::result::Result<Vec<ContactRecord>, LoadError>>;

pub struct TuiServices {
    /// Data location, shown in the status bar
    pub source: String,
    pub loader: Loader,
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub opener: Box<dyn LinkOpener>,
    pub theme_store: Box<dyn ThemeStore>,
}

/// Screen rectangles from the last frame, used for mouse hit-testing.
#[derive(Debug, Clone, Copy)]
struct HitMap {
    search: SearchBarAreas,
    show_clear: bool,
    table: TableAreas,
}

pub struct TuiRenderer {
    services: TuiServices,
    state: ViewState,
    theme: Theme,
    theme_source: ThemeSource,
    focus: Focus,
    search: SearchInput,
    headers: HeaderFocus,
    rows: RowSelection,
    debouncer: Debouncer<String>,
    copied: Option<(usize, Instant)>,
    /// Bumped whenever row indices change meaning
    generation: u64,
    copy_tx: Sender<CopyOutcome>,
    copy_rx: Receiver<CopyOutcome>,
    hit_map: Option<HitMap>,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(
        services: TuiServices,
        state: ViewState,
        theme: Theme,
        theme_source: ThemeSource,
    ) -> Self {
        let (copy_tx, copy_rx) = mpsc::channel();
        let headers = HeaderFocus::new(state.sort_column());
        Self {
            services,
            state,
            theme,
            theme_source,
            focus: Focus::Search,
            search: SearchInput::new(),
            headers,
            rows: RowSelection::new(),
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            copied: None,
            generation: 0,
            copy_tx,
            copy_rx,
            hit_map: None,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn run(mut self, watcher: Option<DataWatcher>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, watcher.as_ref());

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        watcher: Option<&DataWatcher>,
    ) -> Result<()> {
        // First frame shows the loading row while the source is fetched
        terminal.draw(|f| self.render(f))?;
        self.reload();

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(self.next_timeout(Instant::now()))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key, Instant::now()),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse, Instant::now()),
                    _ => {}
                }
            }

            if let Some(watcher) = watcher {
                self.handle_watch_events(watcher.poll());
            }

            self.tick(Instant::now());
        }

        Ok(())
    }

    /// Sleep until the next timer is due, or one tick at most.
    fn next_timeout(&self, now: Instant) -> Duration {
        let mut timeout = TICK_RATE;
        if let Some(due) = self.debouncer.time_until_due(now) {
            timeout = timeout.min(due);
        }
        if let Some((_, until)) = self.copied {
            timeout = timeout.min(until.saturating_duration_since(now));
        }
        timeout
    }

    /// Fire due timers and collect background results.
    pub fn tick(&mut self, now: Instant) {
        if let Some(query) = self.debouncer.take_due(now) {
            self.state.set_query(query);
            self.on_projection_changed();
        }

        while let Ok(outcome) = self.copy_rx.try_recv() {
            self.apply_copy_outcome(outcome, now);
        }

        if let Some((_, until)) = self.copied
            && now >= until
        {
            self.copied = None;
        }
    }

    fn apply_copy_outcome(&mut self, outcome: CopyOutcome, now: Instant) {
        match outcome {
            CopyOutcome::Copied { target } if target.generation != self.generation => {
                tracing::debug!(row = target.row, "alias copied, rows changed since");
            }
            CopyOutcome::Copied { target } => {
                tracing::debug!(row = target.row, "alias copied");
                self.copied = Some((target.row, now + COPIED_FEEDBACK));
            }
            CopyOutcome::Failed { target, error } => {
                tracing::warn!(row = target.row, %error, "failed to copy alias");
            }
        }
    }

    fn handle_watch_events(&mut self, events: Vec<WatchEvent>) {
        let mut changed = false;
        for event in events {
            match event {
                WatchEvent::Changed(path) => {
                    tracing::info!(path = %path.display(), "data file changed");
                    changed = true;
                }
                WatchEvent::Error(error) => tracing::warn!(%error, "file watcher error"),
            }
        }
        if changed {
            self.reload();
        }
    }

    /// Fetch again; query and sort survive.
    pub fn reload(&mut self) {
        let result = (self.services.loader)();
        match &result {
            Ok(records) => tracing::debug!(count = records.len(), "records applied"),
            Err(err) => tracing::warn!(source = %self.services.source, error = %err, "load failed"),
        }
        self.state.apply_load(result);
        self.on_projection_changed();
    }

    fn on_projection_changed(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.copied = None;
        self.rows.clamp(self.state.filtered_records().len());
    }

    fn clear_search(&mut self) {
        self.debouncer.cancel();
        self.search.clear();
        self.state.clear_query();
        self.on_projection_changed();
        self.focus = Focus::Search;
    }

    fn activate_column(&mut self, column: SortColumn) {
        self.state.activate_column(column);
        self.headers.focus(column);
        self.on_projection_changed();
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.theme_source = ThemeSource::Config;
        if let Err(err) = self.services.theme_store.save_theme(self.theme) {
            tracing::warn!(error = %err, "failed to save theme preference");
        }
    }

    fn copy_alias(&mut self, index: usize) {
        let Some(alias) = self
            .state
            .filtered_records()
            .get(index)
            .and_then(|r| r.usable_alias())
        else {
            return;
        };
        copy_in_background(
            Arc::clone(&self.services.clipboard),
            alias.to_string(),
            CopyTarget {
                row: index,
                generation: self.generation,
            },
            self.copy_tx.clone(),
        );
    }

    fn open_phone(&mut self, index: usize) {
        let Some(phone) = self
            .state
            .filtered_records()
            .get(index)
            .and_then(|r| r.usable_phone())
        else {
            return;
        };
        let href = tel_href(phone);
        if let Err(err) = self.services.opener.open(&href) {
            tracing::warn!(%href, error = %err, "failed to open phone link");
        }
    }

    fn apply_table_action(&mut self, action: TableAction) {
        match action {
            TableAction::Sort(column) => self.activate_column(column),
            TableAction::CopyAlias(index) => self.copy_alias(index),
            TableAction::OpenPhone(index) => self.open_phone(index),
            TableAction::FocusRows => self.focus = Focus::Rows,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('u') => self.clear_search(),
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('r') => self.reload(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        if self.focus == Focus::Search {
            match self.search.handle_input(key) {
                Some(SearchAction::Changed) => {
                    self.debouncer.arm(self.search.value().to_string(), now);
                }
                Some(SearchAction::Leave) => self.focus = Focus::Rows,
                None => {}
            }
            return;
        }

        if self.handle_shortcut(key) {
            return;
        }

        let action = match self.focus {
            Focus::Headers => self.headers.handle_input(key),
            Focus::Rows => self
                .rows
                .handle_input(key, self.state.filtered_records().len()),
            Focus::Search => None,
        };
        if let Some(action) = action {
            self.apply_table_action(action);
        }
    }

    /// Single-key commands shared by the header and row regions.
    fn handle_shortcut(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc if self.focus == Focus::Rows => self.should_quit = true,
            KeyCode::Esc => self.focus = Focus::Rows,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char(digit @ '1'..='3') => {
                let index = digit as usize - '1' as usize;
                if let Some(column) = SortColumn::from_index(index) {
                    self.activate_column(column);
                }
            }
            _ => return false,
        }
        true
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, _now: Instant) {
        let Some(hit) = self.hit_map else {
            return;
        };
        let position = Position::new(mouse.column, mouse.row);
        let len = self.state.filtered_records().len();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollDown => {
                self.rows.select(self.rows.selected().map_or(0, |i| i + 1), len);
                return;
            }
            MouseEventKind::ScrollUp => {
                let index = self.rows.selected().unwrap_or(0).saturating_sub(1);
                self.rows.select(index, len);
                return;
            }
            _ => return,
        }

        if hit.search.toggle.contains(position) {
            self.toggle_theme();
        } else if hit.show_clear && hit.search.clear.contains(position) {
            self.clear_search();
        } else if hit.search.input.contains(position) {
            self.focus = Focus::Search;
        } else if let Some(index) = hit
            .table
            .headers
            .iter()
            .position(|rect| rect.contains(position))
        {
            self.focus = Focus::Headers;
            if let Some(column) = SortColumn::from_index(index) {
                self.activate_column(column);
            }
        } else if hit.table.body.contains(position) {
            let row = self.rows.offset() + (position.y - hit.table.body.y) as usize;
            if row >= len {
                return;
            }
            self.focus = Focus::Rows;
            self.rows.select(row, len);

            if hit.table.columns[SortColumn::Alias.index()].contains(position) {
                self.copy_alias(row);
            } else if hit.table.columns[SortColumn::Phone.index()].contains(position) {
                self.open_phone(row);
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let screen = present_screen(
            &self.state,
            &ScreenContext {
                source: &self.services.source,
                input: self.search.value(),
                focus: self.focus,
                theme: self.theme,
                theme_source: self.theme_source,
                focused_header: self.headers.index(),
                copied_row: self.copied.map(|(row, _)| row),
            },
        );
        let palette = Palette::for_theme(self.theme);

        f.render_widget(Block::default().style(palette.base()), f.area());

        let [search_area, table_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(f.area());

        f.render_widget(
            SearchBarView::new(&screen.search, &screen.theme, &palette),
            search_area,
        );
        f.render_stateful_widget(
            ContactTableView::new(&screen, &palette),
            table_area,
            self.rows.state_mut(),
        );
        f.render_widget(StatusBarView::new(&screen.table, &palette), status_area);
        f.render_widget(HelpBarView::new(screen.focus, &palette), help_area);

        let search = SearchBarAreas::split(search_area);
        if screen.search.focused {
            let width = self.search.value().chars().count() as u16;
            let x = (search.input.x + width).min(search.input.right().saturating_sub(1));
            f.set_cursor_position(Position::new(x, search.input.y));
        }

        self.hit_map = Some(HitMap {
            search,
            show_clear: screen.search.show_clear,
            table: TableAreas::split(table_area),
        });
    }
}

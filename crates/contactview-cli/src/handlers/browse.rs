use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use contactview_engine::ViewState;
use contactview_runtime::{Config, DataWatcher, FileTransport, is_remote, load_from};
use contactview_types::{SortColumn, SortDirection, Theme};

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::platform::{SystemClipboard, SystemOpener};
use crate::presentation::ViewMode;
use crate::presentation::renderers::{ThemeStore, TuiRenderer, TuiServices};

use super::list;

/// Writes theme changes made in the TUI back to config.toml.
struct ConfigThemeStore {
    config: Config,
    path: PathBuf,
}

impl ThemeStore for ConfigThemeStore {
    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.config.persist_theme(theme, &self.path)?;
        Ok(())
    }
}

pub fn handle(
    ctx: &ExecutionContext,
    watch: bool,
    interactive: bool,
    format: OutputFormat,
) -> Result<()> {
    if !interactive {
        tracing::info!("stdout is not a terminal, printing the list instead");
        return list::handle(
            ctx,
            None,
            SortColumn::default(),
            SortDirection::default(),
            format,
            ViewMode::default(),
        );
    }

    let (location, _) = ctx.data_location()?;
    let (theme, theme_source) = ctx.theme()?;

    let watcher = if !watch {
        None
    } else if is_remote(&location) {
        tracing::warn!(%location, "--watch only applies to local files, ignoring");
        None
    } else {
        let path = FileTransport::new().resolve(&location);
        tracing::info!(path = %path.display(), "watching data file");
        Some(DataWatcher::new(&path)?)
    };

    let loader_location = location.clone();
    let services = TuiServices {
        source: location,
        loader: Box::new(move || load_from(&loader_location)),
        clipboard: Arc::new(SystemClipboard::new()),
        opener: Box::new(SystemOpener),
        theme_store: Box::new(ConfigThemeStore {
            config: ctx.config_for_update()?,
            path: ctx.config_path(),
        }),
    };

    TuiRenderer::new(services, ViewState::new(), theme, theme_source).run(watcher)
}

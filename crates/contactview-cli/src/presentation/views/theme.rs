use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{CreateView, ThemeSource, ThemeViewModel, ViewMode};

impl CreateView for ThemeViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ThemeView { data: self, mode })
    }
}

struct ThemeView<'a> {
    data: &'a ThemeViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ThemeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.theme);
        }

        let source = match self.data.source {
            ThemeSource::Config => "saved preference",
            ThemeSource::Ambient => "terminal background (COLORFGBG)",
            ThemeSource::Default => "default",
        };
        writeln!(f, "Theme: {} ({})", self.data.theme.bold(), source)?;

        if self.mode == ViewMode::Verbose {
            writeln!(f, "aria-pressed: {}", self.data.aria_pressed)?;
            if let Some(path) = &self.data.config_path {
                writeln!(f, "Config: {}", path)?;
            }
        }
        Ok(())
    }
}

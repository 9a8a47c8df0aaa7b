use std::fmt;

use owo_colors::OwoColorize;

use crate::context::{LocationSource, ThemeSource};
use crate::presentation::formatters::sanitize;
use crate::presentation::view_models::{ConfigViewModel, CreateView, ViewMode};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

fn location_source(source: LocationSource) -> &'static str {
    match source {
        LocationSource::Flag => "--data",
        LocationSource::Config => "config.toml",
        LocationSource::Default => "default",
    }
}

fn theme_source(source: ThemeSource) -> &'static str {
    match source {
        ThemeSource::Config => "config.toml",
        ThemeSource::Ambient => "COLORFGBG",
        ThemeSource::Default => "default",
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exists = if self.data.config_exists {
            ""
        } else {
            " (not created yet)"
        };
        writeln!(f, "{:<14} {}{}", "Config:".bold(), self.data.config_path, exists)?;
        writeln!(
            f,
            "{:<14} {} ({})",
            "Data:".bold(),
            sanitize(&self.data.data_location),
            location_source(self.data.data_location_source)
        )?;
        writeln!(
            f,
            "{:<14} {} ({})",
            "Theme:".bold(),
            self.data.theme,
            theme_source(self.data.theme_source)
        )?;
        writeln!(f, "{:<14} {}", "TUI log:".bold(), self.data.log_path)
    }
}

use anyhow::Result;
use contactview_runtime::{Config, DEFAULT_LOCATION, ambient_theme};
use contactview_types::Theme;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where the effective data location came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    Flag,
    Config,
    Default,
}

/// Where the effective theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    Config,
    Ambient,
    Default,
}

pub struct ExecutionContext {
    data_dir: PathBuf,
    data_flag: Option<String>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, data_flag: Option<String>) -> Self {
        Self {
            data_dir,
            data_flag,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("contactview.log")
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config = Config::load_from(&self.config_path())?;
            Ok(config)
        })
    }

    /// Data location: `--data`, then `data_location` in config.toml, then the default.
    pub fn data_location(&self) -> Result<(String, LocationSource)> {
        if let Some(flag) = &self.data_flag {
            return Ok((flag.clone(), LocationSource::Flag));
        }

        if let Some(configured) = &self.config()?.data_location {
            return Ok((configured.clone(), LocationSource::Config));
        }

        Ok((DEFAULT_LOCATION.to_string(), LocationSource::Default))
    }

    pub fn theme(&self) -> Result<(Theme, ThemeSource)> {
        let config = self.config()?;
        let resolved = if let Some(theme) = config.theme {
            (theme, ThemeSource::Config)
        } else if let Some(theme) = ambient_theme() {
            (theme, ThemeSource::Ambient)
        } else {
            (Theme::default(), ThemeSource::Default)
        };
        Ok(resolved)
    }

    /// Fresh copy of the config for editing; the cached one stays untouched.
    pub fn config_for_update(&self) -> Result<Config> {
        Ok(self.config()?.clone())
    }
}

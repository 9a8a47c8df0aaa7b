use crate::{Error, Result};
use contactview_types::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace directory (config, logs) based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CONTACTVIEW_PATH environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.contactview (fallback for systems without one)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CONTACTVIEW_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("contactview"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".contactview"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Read the terminal's light/dark signal from `COLORFGBG` ("fg;bg").
///
/// Background colour indices 7 and 15 are light; any other index is dark.
pub fn ambient_theme() -> Option<Theme> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
}

fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    if bg == 7 || bg == 15 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Last theme chosen by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    /// Where contacts are loaded from when `--data` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_location: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Record a theme choice and write it through to `path`.
    pub fn persist_theme(&mut self, theme: Theme, path: &Path) -> Result<()> {
        self.theme = Some(theme);
        self.save_to(path)?;
        tracing::debug!(%theme, path = %path.display(), "theme preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.theme, None);
        assert_eq!(config.data_location, None);
    }

    #[test]
    fn test_theme_round_trip_through_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.persist_theme(Theme::Light, &config_path)?;
        assert!(config_path.exists());

        let reloaded = Config::load_from(&config_path)?;
        assert_eq!(reloaded.theme, Some(Theme::Light));

        Ok(())
    }

    #[test]
    fn test_theme_serialized_as_lowercase_string() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            theme: Some(Theme::Dark),
            data_location: Some("people.json".to_string()),
        };
        config.save_to(&config_path)?;

        let content = std::fs::read_to_string(&config_path)?;
        assert!(content.contains("theme = \"dark\""));
        assert!(content.contains("data_location = \"people.json\""));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_config_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "theme = \"sepia\"")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_colorfgbg_background_decides_theme() {
        assert_eq!(theme_from_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("0;7"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("15;default;0"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("garbage"), None);
    }
}

use contactview_types::Theme;

use crate::context::ThemeSource;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, ThemeViewModel,
};

pub fn present_theme(
    theme: Theme,
    source: ThemeSource,
    config_path: Option<String>,
) -> CommandResultViewModel<ThemeViewModel> {
    let content = ThemeViewModel {
        theme,
        source,
        aria_pressed: theme.is_dark(),
        config_path,
    };

    let mut result = CommandResultViewModel::new(content);
    if source != ThemeSource::Config {
        result = result.with_suggestion(
            Guidance::new("Persist a preference").with_command("contactview theme set light|dark"),
        );
    }
    result
}

/// Result of `theme set` / `theme toggle`, after the preference was written.
pub fn present_theme_change(
    theme: Theme,
    config_path: String,
) -> CommandResultViewModel<ThemeViewModel> {
    CommandResultViewModel::new(ThemeViewModel {
        theme,
        source: ThemeSource::Config,
        aria_pressed: theme.is_dark(),
        config_path: Some(config_path),
    })
    .with_badge(StatusBadge::success(format!("Theme set to {}", theme)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_pressed_tracks_dark_mode() {
        assert!(present_theme(Theme::Dark, ThemeSource::Default, None).content.aria_pressed);
        assert!(!present_theme(Theme::Light, ThemeSource::Ambient, None).content.aria_pressed);
    }

    #[test]
    fn test_suggests_persisting_only_when_not_stored() {
        assert!(present_theme(Theme::Dark, ThemeSource::Config, None)
            .suggestions
            .is_empty());
        assert_eq!(
            present_theme(Theme::Dark, ThemeSource::Ambient, None)
                .suggestions
                .len(),
            1
        );
    }

    #[test]
    fn test_theme_change_has_success_badge() {
        let result = present_theme_change(Theme::Light, "/tmp/config.toml".to_string());
        assert_eq!(result.content.source, ThemeSource::Config);
        assert!(!result.is_failure());
        assert!(result.badge.is_some());
    }
}

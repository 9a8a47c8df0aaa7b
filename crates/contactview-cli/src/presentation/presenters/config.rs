use contactview_types::Theme;

use crate::context::{LocationSource, ThemeSource};
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub struct ConfigSnapshot {
    pub config_path: String,
    pub config_exists: bool,
    pub data_location: String,
    pub data_location_source: LocationSource,
    pub theme: Theme,
    pub theme_source: ThemeSource,
    pub log_path: String,
}

pub fn present_config(
    snapshot: ConfigSnapshot,
    updated: bool,
) -> CommandResultViewModel<ConfigViewModel> {
    let config_exists = snapshot.config_exists;
    let content = ConfigViewModel {
        config_path: snapshot.config_path,
        config_exists,
        data_location: snapshot.data_location,
        data_location_source: snapshot.data_location_source,
        theme: snapshot.theme,
        theme_source: snapshot.theme_source,
        log_path: snapshot.log_path,
    };

    let mut result = CommandResultViewModel::new(content);
    if updated {
        result = result.with_badge(StatusBadge::success("Configuration saved"));
    } else if !config_exists {
        result = result
            .with_badge(StatusBadge::info("No config.toml yet, showing defaults"))
            .with_suggestion(
                Guidance::new("Store a default data location")
                    .with_command("contactview config set-data <PATH|URL>"),
            );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(config_exists: bool) -> ConfigSnapshot {
        ConfigSnapshot {
            config_path: "/tmp/cv/config.toml".to_string(),
            config_exists,
            data_location: "contacts.json".to_string(),
            data_location_source: LocationSource::Default,
            theme: Theme::Dark,
            theme_source: ThemeSource::Default,
            log_path: "/tmp/cv/contactview.log".to_string(),
        }
    }

    #[test]
    fn test_missing_config_gets_info_badge() {
        let result = present_config(snapshot(false), false);
        assert!(result.badge.is_some());
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_existing_config_shows_plainly() {
        let result = present_config(snapshot(true), false);
        assert!(result.badge.is_none());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_update_reports_success() {
        let result = present_config(snapshot(true), true);
        assert!(result.badge.is_some());
        assert!(!result.is_failure());
    }
}

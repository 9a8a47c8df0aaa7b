use contactview_types::Theme;
use serde::Serialize;

pub use crate::context::ThemeSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeViewModel {
    pub theme: Theme,
    pub source: ThemeSource,
    /// Pressed state of the theme toggle: `true` while dark mode is on
    pub aria_pressed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

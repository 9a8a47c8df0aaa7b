use contactview_types::Theme;
use serde::Serialize;

use crate::context::{LocationSource, ThemeSource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub config_exists: bool,
    pub data_location: String,
    pub data_location_source: LocationSource,
    pub theme: Theme,
    pub theme_source: ThemeSource,
    pub log_path: String,
}

pub mod config;
pub mod contacts;
pub mod theme;
pub mod tui;

pub use config::{ConfigSnapshot, present_config};
pub use contacts::{
    present_alias_cell, present_body, present_columns, present_contact_list, present_phone_cell,
    present_row, present_status, present_table, tel_href,
};
pub use theme::{present_theme, present_theme_change};
pub use tui::{ScreenContext, present_screen};

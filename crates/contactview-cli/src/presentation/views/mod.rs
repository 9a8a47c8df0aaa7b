pub mod config;
pub mod contacts;
pub mod theme;
pub mod tui;

pub use contacts::sort_glyph;

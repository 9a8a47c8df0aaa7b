use contactview_engine::ViewState;
use contactview_types::Theme;

use crate::context::ThemeSource;
use crate::presentation::view_models::{
    Focus, SearchBarViewModel, ThemeViewModel, TuiScreenViewModel,
};

use super::contacts::present_table;

/// UI-side inputs to a frame; everything else comes from the `ViewState`.
pub struct ScreenContext<'a> {
    pub source: &'a str,
    pub input: &'a str,
    pub focus: Focus,
    pub theme: Theme,
    pub theme_source: ThemeSource,
    pub focused_header: usize,
    pub copied_row: Option<usize>,
}

pub fn present_screen(state: &ViewState, ctx: &ScreenContext<'_>) -> TuiScreenViewModel {
    TuiScreenViewModel {
        focus: ctx.focus,
        search: SearchBarViewModel {
            input: ctx.input.to_string(),
            focused: ctx.focus == Focus::Search,
            show_clear: state.has_query(),
        },
        table: present_table(state, ctx.source),
        theme: ThemeViewModel {
            theme: ctx.theme,
            source: ctx.theme_source,
            aria_pressed: ctx.theme.is_dark(),
            config_path: None,
        },
        focused_header: (ctx.focus == Focus::Headers).then_some(ctx.focused_header),
        copied_row: ctx.copied_row,
    }
}

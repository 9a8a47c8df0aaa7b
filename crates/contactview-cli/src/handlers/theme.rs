use anyhow::Result;
use contactview_types::Theme;

use crate::args::{OutputFormat, ThemeCommand};
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_theme, present_theme_change};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};

pub fn handle(ctx: &ExecutionContext, command: ThemeCommand, format: OutputFormat) -> Result<()> {
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    let config_path = ctx.config_path();

    let target = match command {
        ThemeCommand::Show => {
            let (theme, source) = ctx.theme()?;
            let display_path = config_path.display().to_string();
            return renderer.render(present_theme(theme, source, Some(display_path)));
        }
        ThemeCommand::Set { theme } => theme,
        ThemeCommand::Toggle => ctx.theme()?.0.toggled(),
    };

    save(ctx, target)?;
    renderer.render(present_theme_change(
        target,
        config_path.display().to_string(),
    ))
}

fn save(ctx: &ExecutionContext, theme: Theme) -> Result<()> {
    let mut config = ctx.config_for_update()?;
    config.persist_theme(theme, &ctx.config_path())?;
    Ok(())
}

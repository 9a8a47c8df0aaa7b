use anyhow::Result;

use crate::args::{ConfigCommand, OutputFormat};
use crate::context::{ExecutionContext, LocationSource};
use crate::presentation::presenters::{ConfigSnapshot, present_config};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};

pub fn handle(ctx: &ExecutionContext, command: ConfigCommand, format: OutputFormat) -> Result<()> {
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());

    match command {
        ConfigCommand::Show => {
            let (data_location, data_location_source) = ctx.data_location()?;
            renderer.render(present_config(
                snapshot(ctx, data_location, data_location_source)?,
                false,
            ))
        }
        ConfigCommand::SetData { location } => {
            let mut config = ctx.config_for_update()?;
            config.data_location = Some(location.clone());
            config.save_to(&ctx.config_path())?;
            tracing::info!(%location, "default data location saved");

            renderer.render(present_config(
                snapshot(ctx, location, LocationSource::Config)?,
                true,
            ))
        }
    }
}

fn snapshot(
    ctx: &ExecutionContext,
    data_location: String,
    data_location_source: LocationSource,
) -> Result<ConfigSnapshot> {
    let config_path = ctx.config_path();
    let (theme, theme_source) = ctx.theme()?;
    Ok(ConfigSnapshot {
        config_exists: config_path.exists(),
        config_path: config_path.display().to_string(),
        data_location,
        data_location_source,
        theme,
        theme_source,
        log_path: ctx.log_path().display().to_string(),
    })
}

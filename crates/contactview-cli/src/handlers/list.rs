use anyhow::{Result, anyhow};
use contactview_engine::ViewState;
use contactview_runtime::load_from;
use contactview_types::{SortColumn, SortDirection};

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_contact_list;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};

pub fn handle(
    ctx: &ExecutionContext,
    query: Option<String>,
    column: SortColumn,
    direction: SortDirection,
    format: OutputFormat,
    mode: ViewMode,
) -> Result<()> {
    let (location, source) = ctx.data_location()?;
    tracing::debug!(%location, ?source, %column, %direction, "listing contacts");

    let mut state = ViewState::new().with_sort(column, direction);
    if let Some(query) = query {
        state.set_query(query);
    }
    state.apply_load(load_from(&location));

    let result = present_contact_list(&state, &location);
    let failed = result.is_failure();
    ConsoleRenderer::new(format.into(), mode).render(result)?;

    if failed {
        return Err(anyhow!("failed to load contacts from {}", location));
    }
    Ok(())
}

use std::io;

use anyhow::Result;
use contactview_runtime::resolve_workspace_path;
use is_terminal::IsTerminal;

use super::args::{Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;
use super::logging;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.data.clone());

    let command = cli.command.unwrap_or(Commands::Browse { watch: false });

    // The TUI owns the terminal, so its logs go to a file
    let interactive = matches!(command, Commands::Browse { .. }) && io::stdout().is_terminal();
    if interactive {
        logging::init_file(cli.log_level, &ctx.log_path())?;
    } else {
        logging::init_stderr(cli.log_level);
    }
    tracing::debug!(data_dir = %ctx.data_dir().display(), "workspace resolved");

    match command {
        Commands::Browse { watch } => handlers::browse::handle(&ctx, watch, interactive, cli.format),

        Commands::List {
            query,
            sort,
            view_mode,
        } => handlers::list::handle(
            &ctx,
            query,
            sort.sort,
            sort.direction(),
            cli.format,
            view_mode.resolve(),
        ),

        Commands::Theme { command } => handlers::theme::handle(&ctx, command, cli.format),

        Commands::Config { command } => handlers::config::handle(&ctx, command, cli.format),
    }
}

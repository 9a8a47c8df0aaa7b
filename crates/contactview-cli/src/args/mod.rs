// NOTE: Command Organization Rationale
//
// Why is `browse` the default (not `list`)?
// - The interactive table is the primary surface; `list` exists for pipes and scripts
// - `browse` falls back to `list` output when stdout is not a terminal
//
// Why namespaced `theme` and `config` subcommands?
// - Preferences are edited rarely; grouping keeps the top-level help short

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "contactview")]
#[command(about = "Browse, filter and sort a JSON contact list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml and the TUI log (default: platform config dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Contact data location: a file path or an http(s) URL
    #[arg(long, global = true)]
    pub data: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

use clap::Subcommand;
use contactview_types::{SortColumn, Theme};

use super::common::{SortArgs, ViewModeArgs};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive contact table (default)")]
    Browse {
        #[arg(long, help = "Reload automatically when the data file changes")]
        watch: bool,
    },

    #[command(about = "Print the filtered and sorted contacts")]
    List {
        #[arg(long, short, help = "Case-insensitive substring filter")]
        query: Option<String>,

        #[command(flatten)]
        sort: SortArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show or change the light/dark theme preference")]
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },

    #[command(about = "Inspect or edit config.toml")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    #[command(about = "Show the effective theme and where it comes from")]
    Show,

    #[command(about = "Persist a theme")]
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },

    #[command(about = "Flip between light and dark and persist the result")]
    Toggle,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the resolved configuration")]
    Show,

    #[command(about = "Set the default data location")]
    SetData { location: String },
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    value.parse()
}

pub(crate) fn parse_column(value: &str) -> Result<SortColumn, String> {
    value.parse()
}

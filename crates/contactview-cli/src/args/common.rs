use clap::Args;
use contactview_types::{SortColumn, SortDirection};

use super::commands::parse_column;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (tab-separated rows, no header or status)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Verbose output (adds tel: links)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SortArgs {
    #[arg(
        long,
        value_parser = parse_column,
        default_value = "name",
        help = "Column to sort by: alias, name or phone"
    )]
    pub sort: SortColumn,

    #[arg(long, help = "Sort descending")]
    pub desc: bool,
}

impl SortArgs {
    pub fn direction(&self) -> SortDirection {
        if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

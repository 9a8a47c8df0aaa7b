// NOTE: contactview Architecture Rationale
//
// Why a pure engine crate (not logic inside the TUI loop)?
// - Filtering and sorting are deterministic functions of (records, query, sort key)
// - The TUI and the `list` command must show the same rows for the same inputs
// - The projection is always re-derived, never patched, so it cannot go stale
//
// Why a thin stateful controller?
// - The TUI owns everything effectful: terminal, clipboard, opener, timers
// - Decisions (which rows, which order, which body message) live in the engine
//   and the presenters, where they are unit-tested without a terminal
//
// Why treat "N/A" as text, not as a missing value?
// - The data format uses the literal string as part of its contract
// - Both the literal and an absent key render identically, but only the
//   literal participates in search

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod platform;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, ThemeCommand};
pub use commands::run;

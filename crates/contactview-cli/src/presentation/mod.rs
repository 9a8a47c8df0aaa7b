//! # Presentation Layer
//!
//! Everything between the engine's `ViewState` and the bytes on screen.
//! Adapted MVVM: the engine decides *which* rows and in *what* order, this
//! layer decides *how* they look.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!  (Controller)    (Converter)       (Contract)        (View)       (Console/JSON/CSV/TUI)
//! ```
//!
//! ## Directory Guide
//!
//! ### 1. `view_models/` (The Data Contract)
//! * Pure data containers that implement `Serialize`.
//! * The JSON Test: "If I output this struct as JSON, is it clean and machine-readable?"
//!   Raw record text goes here untouched; escaping is the view's job.
//!
//! ### 2. `presenters/` (The Transformation Logic)
//! * Pure functions from `ViewState` and friends to ViewModels.
//! * Owns the cell rules: sentinel handling, `tel:` targets, body state.
//!
//! ### 3. `views/` (Text and Widgets)
//! * `fmt::Display` wrappers for console output, ratatui `Widget`s for the TUI.
//! * Every record string passes through `formatters::sanitize` before display.
//!
//! ### 4. `renderers/` (The Output Strategy)
//! * `console.rs`: plain, JSON and CSV output for one-shot commands.
//! * `tui.rs`: the interactive table, its event loop and its UI state.
//!
//! ### 5. `formatters/` (The Utilities)
//! * Fixed messages, status text, truncation and sanitizing.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | **`view_models/`** |
//! | Change what an absent phone shows | **`presenters/`** |
//! | Change a color or column width | **`views/`** |
//! | Change a key binding | **`renderers/tui.rs`** |
//! | Reword a status message | **`formatters/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, OutputFormat, StatusBadge, StatusLevel,
    ViewMode,
};

//! Host services consumed by the TUI: the system clipboard and the URL opener.
//!
//! Both sit behind traits so the controller can be driven in tests without a
//! desktop session.

pub mod clipboard;
pub mod opener;

pub use clipboard::{
    ClipboardWriter, CopyOutcome, CopyTarget, SystemClipboard, copy_in_background,
};
pub use opener::{LinkOpener, SystemOpener};

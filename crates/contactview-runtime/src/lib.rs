pub mod config;
pub mod debounce;
pub mod error;
pub mod source;
pub mod watcher;

pub use config::{Config, ambient_theme, resolve_workspace_path};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use error::{Error, Result};
pub use source::{
    DEFAULT_LOCATION, FetchResponse, FileTransport, HttpTransport, Transport, is_remote, load,
    load_from, transport_for,
};
pub use watcher::{DataWatcher, WatchEvent};

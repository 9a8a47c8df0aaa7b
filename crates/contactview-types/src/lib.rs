pub mod contact;
pub mod error;
pub mod sort;
pub mod theme;

pub use contact::*;
pub use error::{LoadError, Result};
pub use sort::*;
pub use theme::*;

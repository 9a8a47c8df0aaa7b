//! Pure filter/sort pipeline over contact records.
//!
//! Nothing in this crate performs I/O. [`project`] derives the visible rows
//! from the master record set, and [`ViewState`] keeps that projection in
//! lockstep with the query and sort inputs by re-deriving it on every change.

pub mod collate;
pub mod filter;
pub mod phone;
pub mod projection;
pub mod state;

pub use collate::{collate, collation_key};
pub use filter::{matches_query, normalize_query};
pub use phone::{compare_phone, phone_digits};
pub use projection::{compare_records, project};
pub use state::{StatusLine, TableBody, ViewState};

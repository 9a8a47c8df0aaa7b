//! Testing infrastructure for contactview integration tests.
//!
//! - `TestWorld`: isolated workspace and working directory per test
//! - `assertions`: checks against the `--format json` contract
//! - `fixtures`: contact documents used across tests

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

//! Testing infrastructure for contactgrid integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI invocation helpers
//! - `assertions`: checks over the CLI's JSON and rendered output
//! - `fixtures`: sample contact records

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

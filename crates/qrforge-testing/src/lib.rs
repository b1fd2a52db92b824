//! Testing infrastructure for qrforge integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `assertions`: checks over the CLI's JSON output

pub mod assertions;
pub mod world;

pub use world::{CliResult, TestWorld};

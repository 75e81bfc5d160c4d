//! Testing infrastructure for nowplaying integration tests.
//!
//! - `TestWorld`: isolated config directory and CLI invocation
//! - `fixtures`: sample server and session documents

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

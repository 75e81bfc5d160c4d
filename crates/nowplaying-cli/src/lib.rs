mod args;
mod commands;
pub mod config;
pub mod logging;
pub mod terminal;
pub mod transport;
pub mod types;

pub use args::Cli;
pub use commands::{run, run_with, Settings};
